//! QDataStream value types: variant tags, payloads and calendar values.

mod calendar;
mod meta_type;
mod value;

pub use calendar::{floor_div, Date, DateTime, Time, TimeSpec};
pub use meta_type::{MetaType, REGISTRY, SUPPORTED};
pub use value::{Value, Variant, VariantMap};
