pub mod admin;
pub mod contact;
pub mod goals;
pub mod health;
pub mod images;
pub mod meetings;
pub mod members;
pub mod messages;
pub mod stream;

pub use admin::{admin_unlock, check_env, member_columns_migration};
pub use contact::{get_contact, put_contact};
pub use goals::{create_goal, delete_goal, list_goals, update_goal};
pub use health::health_handler;
pub use images::{list_images, sync_images, upload_image};
pub use meetings::{create_meeting, delete_meeting, list_meetings, update_meeting};
pub use members::{create_member, delete_member, list_members, update_member};
pub use messages::{create_message, delete_message, list_messages, reply_message};
pub use stream::stream_handler;
