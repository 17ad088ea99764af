mod error;
pub use self::error::ApiError;

mod email;
pub use self::email::{Attachment, Email, EmailResponse, Header};

mod stats;
pub use self::stats::{BounceCount, DeliveryStats};
