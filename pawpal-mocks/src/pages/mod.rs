mod booking_demo;
mod booking_states;
mod mock_index;

pub use booking_demo::BookingDemo;
pub use booking_states::BookingStates;
pub use mock_index::MockIndex;
