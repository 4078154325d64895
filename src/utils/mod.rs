pub mod bearer;
pub mod time;
pub mod validated_json;
