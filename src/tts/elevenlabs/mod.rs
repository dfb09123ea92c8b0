pub mod elevenlabs;
pub mod structs;
