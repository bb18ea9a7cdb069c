pub mod calculator;
mod slots;
mod weekend;

pub use calculator::CountdownCalculator;
pub use slots::{navigation_target, PageSlots};
pub use weekend::{
    final_friday, is_weekend_window, next_weekend_start, weekend_state, TimeRemaining,
    WeekendState, WeekendTick, WeekendTicker,
};
