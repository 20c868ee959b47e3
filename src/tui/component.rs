use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields, usually borrowed
/// from `Portfolio` and the active `Theme`) and render into a `Rect`.
///
/// `render` takes `&mut self` so stateful components (splash animation)
/// can update presentation state during the render pass, in line with
/// Ratatui's `StatefulWidget` pattern. Section components are stateless
/// and simply ignore the mutability.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
