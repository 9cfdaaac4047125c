mod appointments;
mod helpers;
