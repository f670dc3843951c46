use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the React pattern: props arrive as struct fields,
/// internal state stays private, and rendering targets a `Frame` within a
/// given `Rect`.
///
/// `render` takes `&mut self` so components can update presentation state
/// (scroll offsets, cached measurements) during the render pass, which
/// aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// Implemented on the persistent state type when the component itself is
/// transient (recreated each frame), e.g. `ResponsePanelState`.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
