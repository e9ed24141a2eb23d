//! Page fillers and effects.
//!
//! Every filler follows the same pattern: fetch JSON from a caller-supplied
//! endpoint, render into a target element of the shared page, and invoke
//! caller-supplied callbacks. Each load is an independent operation; nothing
//! is cached across calls, and overlapping loads are not coalesced — the most
//! recently completed response wins.

pub mod dropdown;
pub mod notify;
pub mod radio;
pub mod table;
pub mod toggle;
pub mod tooltip;

mod common;

#[cfg(test)]
mod testing;

pub use dropdown::{fill_dropdown, wire_refresh};
pub use notify::{Toast, process_query_notification};
pub use radio::fill_radio_group;
pub use table::fill_table;
pub use toggle::{Timing, show_visibility_group};
pub use tooltip::{TooltipActivator, init_tooltips};
