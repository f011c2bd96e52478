//! UI Components

pub mod book_card;
pub mod book_detail;
pub mod change_image;
pub mod change_password;
pub mod delete_account;
pub mod edit_profile;
pub mod layout;
pub mod logo;
pub mod modal;
pub mod rating;
pub mod spinner;
pub mod toggle;

pub use book_card::BookCard;
pub use book_detail::BookDetailModal;
pub use change_image::ChangeImageModal;
pub use change_password::ChangePasswordModal;
pub use delete_account::DeleteAccountModal;
pub use edit_profile::EditProfileModal;
pub use layout::DashboardLayout;
pub use logo::Logo;
pub use modal::Modal;
pub use rating::RatingStars;
pub use spinner::{SkeletonGrid, Spinner};
pub use toggle::ToggleSwitch;
