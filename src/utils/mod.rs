mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, axis_tick_label, format_countdown, format_axis_tick,
    format_hover_label, hover_label, local_clock_label,
};

pub(crate) use maths_utils::{min_max_f64, min_max_i64, nice_step};
