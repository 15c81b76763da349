pub mod errors;
pub mod note;
pub mod post;
pub mod session;
pub mod timestamp;
pub mod todo;
pub mod user;
pub mod weather;

pub use errors::{FetchError, GeoError};
pub use note::{GroupedNotes, Note, NoteList, NotePriority};
pub use post::Post;
pub use session::{Profile, Session};
pub use timestamp::Timestamp;
pub use todo::{OverrideMap, Todo, effective_completion, toggle_override};
pub use user::{Address, User};
pub use weather::{WeatherCondition, WeatherMain, WeatherReport, WeatherSys, Wind};
