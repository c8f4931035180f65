pub mod constants;
pub mod layout;
pub mod render;

/// Where typed keys go on the listings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Cards,
    Search,
}
