use std::io::{BufRead, Write};

use crate::{
    catalog::{CatalogEditor, CatalogQueries, CatalogStats},
    error::CatalogError,
    menu::{prompt::Prompt, MenuChoice},
    model::movie::{Movie, MovieUpdate},
    persisters::csv_writer::CsvWriter,
    store::CatalogStore,
};

pub struct MenuLoop<R, W> {
    store: CatalogStore,
    export_file: String,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> MenuLoop<R, W> {
    pub fn new(store: CatalogStore, export_file: String, input: R, output: W) -> MenuLoop<R, W> {
        MenuLoop {
            store,
            export_file,
            prompt: Prompt::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Runs until the user picks Exit or the input ends. Any store failure ends
    /// the loop with an error.
    pub fn run(&mut self) -> Result<(), CatalogError> {
        match self.run_until_exit() {
            Err(CatalogError::InputClosed) => {
                log::debug!("Input closed, leaving the menu");
                Ok(())
            }
            other => other,
        }
    }

    fn run_until_exit(&mut self) -> Result<(), CatalogError> {
        loop {
            self.print_menu()?;
            let answer = self.prompt.question("Enter your choice: ")?;

            match MenuChoice::from_input(&answer) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.prompt.out(), "Goodbye!")?;
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.prompt.out(), "Invalid choice!")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), CatalogError> {
        let out = self.prompt.out();
        writeln!(out, "\nWelcome to Movie Database")?;
        for choice in MenuChoice::ALL {
            writeln!(out, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), CatalogError> {
        log::debug!("Menu choice {:?}", choice);
        match choice {
            MenuChoice::ShowAll => self.show_movies(),
            MenuChoice::Add => self.add_movie(),
            MenuChoice::Update => self.update_movie(),
            MenuChoice::Search => self.search_movie(),
            MenuChoice::FilterByGenre => self.filter_by_genre(),
            MenuChoice::SortByRating => self.sort_by_rating(),
            MenuChoice::Delete => self.delete_movie(),
            MenuChoice::ShowStats => self.show_stats(),
            MenuChoice::ExportCsv => self.export_csv(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn show_movies(&mut self) -> Result<(), CatalogError> {
        let movies = self.store.load()?;
        self.print_catalog(&movies)
    }

    fn print_catalog(&mut self, movies: &[Movie]) -> Result<(), CatalogError> {
        if movies.is_empty() {
            writeln!(self.prompt.out(), "No movies in database")?;
            return Ok(());
        }
        let all: Vec<&Movie> = movies.iter().collect();
        self.print_movie_list("Movie List:", &all)
    }

    fn print_movie_list(&mut self, heading: &str, movies: &[&Movie]) -> Result<(), CatalogError> {
        let out = self.prompt.out();
        writeln!(out, "\n{}", heading)?;
        for (index, movie) in movies.iter().enumerate() {
            writeln!(out, "{}. {} ({})", index + 1, movie.title, movie.year)?;
            writeln!(out, "   Genre: {}", movie.genre)?;
            writeln!(out, "   Rating: {}/10\n", movie.rating)?;
        }
        Ok(())
    }

    fn add_movie(&mut self) -> Result<(), CatalogError> {
        let title = self.prompt.question("Enter movie title: ")?;
        let year = self.prompt.question("Enter release year: ")?;
        let genre = self.prompt.question("Enter genre: ")?;
        let rating = self.prompt.question("Enter rating (0-10): ")?;

        let mut movies = self.store.load()?;
        CatalogEditor::add(&mut movies, Movie::new(title, year, genre, rating));
        self.store.save(&movies)?;

        writeln!(self.prompt.out(), "Movie added successfully!")?;
        Ok(())
    }

    /// Shows the catalog and asks for a 1-based position. `None` when the
    /// catalog is empty or the number is out of range.
    fn select_movie(&mut self, movies: &[Movie], verb: &str) -> Result<Option<usize>, CatalogError> {
        if movies.is_empty() {
            writeln!(self.prompt.out(), "No movies in database")?;
            return Ok(None);
        }

        self.print_catalog(movies)?;
        let number = self
            .prompt
            .question_int(&format!("Enter movie number to {}: ", verb))?;

        if number < 1 || number as u64 > movies.len() as u64 {
            writeln!(self.prompt.out(), "Invalid movie number!")?;
            return Ok(None);
        }
        Ok(Some(number as usize - 1))
    }

    fn update_movie(&mut self) -> Result<(), CatalogError> {
        let mut movies = self.store.load()?;
        let index = match self.select_movie(&movies, "update")? {
            Some(index) => index,
            None => return Ok(()),
        };

        {
            let movie = &movies[index];
            let out = self.prompt.out();
            writeln!(out, "\nCurrent movie details:")?;
            writeln!(out, "Title: {}", movie.title)?;
            writeln!(out, "Year: {}", movie.year)?;
            writeln!(out, "Genre: {}", movie.genre)?;
            writeln!(out, "Rating: {}", movie.rating)?;
            writeln!(out, "\nEnter new details (press Enter to keep current value):")?;
        }

        let title = self.prompt.question("New title: ")?;
        let year = self.prompt.question("New year: ")?;
        let genre = self.prompt.question("New genre: ")?;
        let rating = self.prompt.question("New rating (0-10): ")?;

        let update = MovieUpdate::from_answers(&title, &year, &genre, &rating);
        CatalogEditor::update(&mut movies, index, update)?;
        self.store.save(&movies)?;

        writeln!(self.prompt.out(), "Movie updated successfully!")?;
        Ok(())
    }

    fn search_movie(&mut self) -> Result<(), CatalogError> {
        let term = self.prompt.question("Enter movie title to search: ")?;
        let movies = self.store.load()?;
        let results = CatalogQueries::search_by_title(&movies, &term);

        if results.is_empty() {
            writeln!(self.prompt.out(), "No movies found!")?;
            return Ok(());
        }
        self.print_movie_list("Search Results:", &results)
    }

    fn filter_by_genre(&mut self) -> Result<(), CatalogError> {
        let genre = self.prompt.question("Enter genre to filter: ")?;
        let movies = self.store.load()?;
        let filtered = CatalogQueries::filter_by_genre(&movies, &genre);

        if filtered.is_empty() {
            writeln!(self.prompt.out(), "No movies found in that genre!")?;
            return Ok(());
        }
        self.print_movie_list(&format!("Movies in {} genre:", genre), &filtered)
    }

    fn sort_by_rating(&mut self) -> Result<(), CatalogError> {
        let movies = self.store.load()?;
        let sorted = CatalogQueries::sort_by_rating(&movies);

        let out = self.prompt.out();
        writeln!(out, "\nMovies sorted by rating (highest to lowest):")?;
        for (index, movie) in sorted.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, movie.title)?;
            writeln!(out, "   Rating: {}/10", movie.rating)?;
            writeln!(out, "   Genre: {}\n", movie.genre)?;
        }
        Ok(())
    }

    fn delete_movie(&mut self) -> Result<(), CatalogError> {
        let mut movies = self.store.load()?;
        let index = match self.select_movie(&movies, "delete")? {
            Some(index) => index,
            None => return Ok(()),
        };

        let query = format!("Are you sure you want to delete \"{}\"?", movies[index].title);
        if !self.prompt.key_in_yn(&query)? {
            writeln!(self.prompt.out(), "Movie not deleted.")?;
            return Ok(());
        }

        CatalogEditor::delete(&mut movies, index)?;
        self.store.save(&movies)?;

        writeln!(self.prompt.out(), "Movie deleted successfully!")?;
        Ok(())
    }

    fn show_stats(&mut self) -> Result<(), CatalogError> {
        let movies = self.store.load()?;
        let stats = CatalogStats::compute(&movies);

        let out = self.prompt.out();
        writeln!(out, "\nDatabase Statistics:")?;
        writeln!(out, "Total Movies: {}", stats.total_movies)?;
        writeln!(out, "Average Rating: {}", stats.average_rating_display())?;
        writeln!(out, "Available Genres: {}", stats.genres.join(", "))?;
        Ok(())
    }

    fn export_csv(&mut self) -> Result<(), CatalogError> {
        let answer = self.prompt.question(&format!(
            "Enter export file name (default: {}): ",
            self.export_file
        ))?;
        let file_name = if answer.is_empty() {
            self.export_file.clone()
        } else {
            answer
        };

        let movies = self.store.load()?;
        if let Err(e) = CsvWriter::save_movies_to_csv(&movies, &file_name) {
            log::warn!("Export failed: {}", e);
            writeln!(self.prompt.out(), "Could not export movies: {}", e)?;
            return Ok(());
        }

        writeln!(
            self.prompt.out(),
            "Exported {} movies to {}",
            movies.len(),
            file_name
        )?;
        Ok(())
    }
}
