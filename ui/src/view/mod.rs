pub mod error;
pub mod profile;

pub trait View {
    fn render(self) -> String;
}
