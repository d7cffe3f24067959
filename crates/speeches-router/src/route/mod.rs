/// Route module
///
/// Contains the template parser and the route definition that pairs a
/// template with its name and view.

pub mod definition;
pub mod pattern;

pub use definition::RouteDefinition;
pub use pattern::{classify_segment, Pattern, Segment};
