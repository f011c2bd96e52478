//! Page modules, one per route.

pub mod category;
pub mod favorites;
pub mod home;
pub mod login;
pub mod personal_library;
pub mod public_library;
pub mod reader;
pub mod recommendations;
pub mod register;
pub mod search;
pub mod settings;

pub use category::CategoryPage;
pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use personal_library::PersonalLibraryPage;
pub use public_library::PublicLibraryPage;
pub use reader::ReaderPage;
pub use recommendations::RecommendationsPage;
pub use register::RegisterPage;
pub use search::SearchPage;
pub use settings::SettingsPage;
