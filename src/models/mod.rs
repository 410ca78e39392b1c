pub mod life_event;
pub mod subject;
pub mod timeline;
pub mod work;

pub use life_event::{LifeEvent, LifeEventKind};
pub use subject::Subject;
pub use timeline::{LifeSpan, TimelineResult};
pub use work::WorkRecord;
