mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod login_button;
pub use login_button::PageLayout;

mod auth_card;
