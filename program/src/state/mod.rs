pub mod ido_times;      // IdoTimes, timetable validation
pub mod program_state;  // ProgramState (zero-copy account view)
pub mod round;          // Round state machine
pub mod token_price;    // TokenPrice fraction math

pub use ido_times::IdoTimes;
pub use program_state::ProgramState;
pub use round::Round;
pub use token_price::TokenPrice;
