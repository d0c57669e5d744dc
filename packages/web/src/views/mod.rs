mod login;
pub use login::Login;

mod recovery_password;
pub use recovery_password::RecoveryPassword;

mod first_login;
pub use first_login::FirstLogin;

mod protected;
pub use protected::{NotFound, Protected};

mod home;
pub use home::Home;

mod athletes;
pub use athletes::Athletes;

mod users;
pub use users::Users;
