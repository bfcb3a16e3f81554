mod error;
mod event;
mod shared;

pub use error::ApiError;
pub use event::create_event::CreateEventUseCase;
pub use event::delete_event::DeleteEventUseCase;
pub use event::get_event::{GetEventUseCase, GetEventsUseCase};
pub use event::update_event::UpdateEventUseCase;
pub use shared::usecase::{execute, UseCase};
