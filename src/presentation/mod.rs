/// Chart option presets
pub mod chart;
/// Display formatting helpers
pub mod formatters;
/// PascalCase aliasing of API payloads
pub mod normalize;
/// Route table and navigation guard
pub mod routes;
