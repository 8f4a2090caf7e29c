pub mod menu_loop;
pub mod prompt;

pub use menu_loop::MenuLoop;
pub use prompt::Prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowAll,
    Add,
    Update,
    Search,
    FilterByGenre,
    SortByRating,
    Delete,
    ShowStats,
    Exit,
    ExportCsv,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::ShowAll,
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Search,
        MenuChoice::FilterByGenre,
        MenuChoice::SortByRating,
        MenuChoice::Delete,
        MenuChoice::ShowStats,
        MenuChoice::Exit,
        MenuChoice::ExportCsv,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::ShowAll => "1",
            MenuChoice::Add => "2",
            MenuChoice::Update => "3",
            MenuChoice::Search => "4",
            MenuChoice::FilterByGenre => "5",
            MenuChoice::SortByRating => "6",
            MenuChoice::Delete => "7",
            MenuChoice::ShowStats => "8",
            MenuChoice::Exit => "9",
            MenuChoice::ExportCsv => "10",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ShowAll => "Show all movies",
            MenuChoice::Add => "Add new movie",
            MenuChoice::Update => "Update movie",
            MenuChoice::Search => "Search movie",
            MenuChoice::FilterByGenre => "Filter by genre",
            MenuChoice::SortByRating => "Sort by rating",
            MenuChoice::Delete => "Delete movie",
            MenuChoice::ShowStats => "Show statistics",
            MenuChoice::Exit => "Exit",
            MenuChoice::ExportCsv => "Export to CSV",
        }
    }

    pub fn from_input(input: &str) -> Option<MenuChoice> {
        let input = input.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == input)
    }
}
