pub mod favorite;
pub mod film;
pub mod init;
pub mod select;
pub mod timetable;
