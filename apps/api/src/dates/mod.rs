// Date calculators: weekday finder, date difference, add/subtract time,
// business days, and the quick-date presets shared by all of them.

pub mod calc;
pub mod format;
pub mod handlers;
pub mod presets;
