//! Success notification (toast)

use std::time::Duration;

use cform_a11y::FocusManager;
use cform_dom::{Document, DomResult, NodeId};

use crate::{TimerId, TimerManager, TimerTask};

/// The shared success banner: hidden, or visible for a fixed duration
#[derive(Debug, Clone)]
pub struct SuccessNotification {
    node: NodeId,
    visible_class: String,
    duration: Duration,
}

impl SuccessNotification {
    pub fn new(node: NodeId, visible_class: &str, duration: Duration) -> Self {
        Self {
            node,
            visible_class: visible_class.to_string(),
            duration,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn is_visible(&self, doc: &Document) -> bool {
        doc.has_class(self.node, &self.visible_class)
    }

    /// Make the toast visible, focus it so it is announced, and schedule
    /// its hide.
    ///
    /// Each call schedules its own hide; earlier ones are not cancelled, so
    /// a second show within the window is still hidden by the first timer.
    pub fn show(
        &self,
        doc: &mut Document,
        focus: &mut FocusManager,
        timers: &mut TimerManager,
    ) -> DomResult<TimerId> {
        doc.add_class(self.node, &self.visible_class)?;
        focus.focus(self.node);
        let timer = timers.set_timeout(TimerTask::HideNotification, self.duration);
        tracing::info!("Success notification shown for {:?}", self.duration);
        Ok(timer)
    }

    pub fn hide(&self, doc: &mut Document) -> DomResult<()> {
        doc.remove_class(self.node, &self.visible_class)?;
        tracing::debug!("Success notification hidden");
        Ok(())
    }
}
