pub mod booking_panel;
pub mod day_grid;
pub mod draft;
pub mod schedule_board;
pub mod week_grid;

pub use booking_panel::BookingPanel;
pub use day_grid::DayGrid;
pub use schedule_board::ScheduleBoardPage;
pub use week_grid::WeekGrid;
