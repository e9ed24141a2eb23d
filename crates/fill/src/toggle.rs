//! Class-prefix visibility groups.
//!
//! Elements sharing `prefix-<value>` classes form mutually exclusive
//! visibility groups: showing one value hides every other group member.

use std::time::Duration;

use pagekit_types::{SharedPage, lock};
use tracing::debug;

/// Animation timing for the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Duration of the hide animation.
    pub hide_speed: Duration,
    /// Delay before the kept group is shown.
    pub show_delay: Duration,
    /// When false, both durations collapse to zero.
    pub animate: bool,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            hide_speed: Duration::from_millis(400),
            show_delay: Duration::from_millis(450),
            animate: true,
        }
    }
}

impl Timing {
    /// Timing with animations disabled; both delays are zero.
    pub fn instant() -> Self {
        Self {
            animate: false,
            ..Self::default()
        }
    }
}

/// Show exactly one visibility group among elements sharing a class prefix.
///
/// Hides every element carrying any `prefix-*` class except `prefix-value`,
/// waits out the hide animation and the show delay, then shows the elements
/// carrying exactly `prefix-value`. Fire-and-forget: no return value and no
/// error path.
pub async fn show_visibility_group(page: &SharedPage, prefix: &str, value: &str, timing: &Timing) {
    let keep_class = format!("{prefix}-{value}");
    debug!(%prefix, %value, "toggling visibility group");

    {
        let mut guard = lock(page);
        for element in guard.elements_mut() {
            if element.has_class_with_prefix(prefix) && !element.has_class(&keep_class) {
                element.visible = false;
            }
        }
    }

    if timing.animate {
        if !timing.hide_speed.is_zero() {
            tokio::time::sleep(timing.hide_speed).await;
        }
        if !timing.show_delay.is_zero() {
            tokio::time::sleep(timing.show_delay).await;
        }
    }

    let mut guard = lock(page);
    for element in guard.elements_mut() {
        if element.has_class(&keep_class) {
            element.visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_types::{Element, Page, shared};

    fn visibility(page: &SharedPage, id: &str) -> bool {
        lock(page).element(id).expect("element").visible
    }

    fn group_page() -> SharedPage {
        let mut page = Page::new("https://example.com/");
        page.insert(Element::new("card-payment").with_class("paytype-card"));
        page.insert(Element::new("invoice-payment").with_class("paytype-invoice"));
        page.insert(Element::new("unrelated").with_class("sidebar"));
        shared(page)
    }

    #[tokio::test]
    async fn shows_the_named_group_and_hides_the_rest() {
        let page = group_page();
        show_visibility_group(&page, "paytype", "invoice", &Timing::instant()).await;

        assert!(!visibility(&page, "card-payment"));
        assert!(visibility(&page, "invoice-payment"));
        assert!(visibility(&page, "unrelated"));
    }

    #[tokio::test]
    async fn previously_hidden_group_member_is_shown_again() {
        let page = group_page();
        show_visibility_group(&page, "paytype", "invoice", &Timing::instant()).await;
        show_visibility_group(&page, "paytype", "card", &Timing::instant()).await;

        assert!(visibility(&page, "card-payment"));
        assert!(!visibility(&page, "invoice-payment"));
    }

    #[tokio::test(start_paused = true)]
    async fn animated_show_waits_out_both_durations() {
        let page = group_page();
        let timing = Timing {
            hide_speed: Duration::from_millis(100),
            show_delay: Duration::from_millis(200),
            animate: true,
        };

        let task = {
            let page = page.clone();
            tokio::spawn(async move {
                show_visibility_group(&page, "paytype", "card", &timing).await;
            })
        };

        tokio::task::yield_now().await;
        // Hide takes effect immediately; the show waits for the delays.
        assert!(!visibility(&page, "invoice-payment"));

        task.await.expect("toggle task");
        assert!(visibility(&page, "card-payment"));
    }

    #[tokio::test]
    async fn a_value_with_no_members_hides_everything_in_the_prefix() {
        let page = group_page();
        show_visibility_group(&page, "paytype", "none", &Timing::instant()).await;

        assert!(!visibility(&page, "card-payment"));
        assert!(!visibility(&page, "invoice-payment"));
    }
}
