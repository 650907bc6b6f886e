mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

mod nav_bar;
use nav_bar::NavBar;
