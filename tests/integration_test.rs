#[cfg(test)]
mod tests {

    use std::{fs, io::Cursor, path::Path};

    use movie_catalog::{
        error::CatalogError, menu::MenuLoop, model::movie::Movie, store::CatalogStore,
    };
    use tempfile::TempDir;

    const SEED: &str = r#"{
  "movies": [
    { "title": "The Mask", "year": "1994", "genre": "Comedy, Fantasy", "rating": "7" },
    { "title": "Heat", "year": 1995, "genre": "Crime, Thriller", "rating": "8" },
    { "title": "Up", "year": "2009", "genre": "Animation,comedy", "rating": "9" }
  ]
}"#;

    fn seeded_catalog(content: &str) -> (TempDir, CatalogStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movie.json");
        fs::write(&path, content).unwrap();
        (dir, CatalogStore::new(path))
    }

    fn run_menu(store: &CatalogStore, input: &str) -> (Result<(), CatalogError>, String) {
        run_menu_exporting_to(store, "movies.csv", input)
    }

    fn run_menu_exporting_to(
        store: &CatalogStore,
        export_file: &str,
        input: &str,
    ) -> (Result<(), CatalogError>, String) {
        let mut menu = MenuLoop::new(
            store.clone(),
            export_file.to_string(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        let result = menu.run();
        let output = String::from_utf8(menu.into_output()).unwrap();
        (result, output)
    }

    fn titles(store: &CatalogStore) -> Vec<String> {
        store.load().unwrap().into_iter().map(|m| m.title).collect()
    }

    #[test]
    fn added_movie_is_listed_last() {
        let (_dir, store) = seeded_catalog(SEED);

        let (result, output) = run_menu(&store, "2\nJaws\n1975\nThriller\n8.1\n1\n9\n");

        assert!(result.is_ok());
        assert!(output.contains("Movie added successfully!"));
        assert!(output.contains("4. Jaws (1975)\n   Genre: Thriller\n   Rating: 8.1/10\n"));
        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(titles(&store), vec!["The Mask", "Heat", "Up", "Jaws"]);
    }

    #[test]
    fn deleting_removes_only_the_chosen_movie() {
        let (_dir, store) = seeded_catalog(SEED);

        let (result, output) = run_menu(&store, "7\n2\ny\n9\n");

        assert!(result.is_ok());
        assert!(output.contains("Enter movie number to delete: "));
        assert!(output.contains("Are you sure you want to delete \"Heat\"? [y/n]: "));
        assert!(output.contains("Movie deleted successfully!"));
        assert_eq!(titles(&store), vec!["The Mask", "Up"]);
    }

    #[test]
    fn declining_the_delete_keeps_the_catalog() {
        let (_dir, store) = seeded_catalog(SEED);

        let (_, output) = run_menu(&store, "7\n1\nn\n9\n");

        assert!(output.contains("Movie not deleted."));
        assert_eq!(titles(&store), vec!["The Mask", "Heat", "Up"]);
    }

    #[test]
    fn update_with_blank_answers_keeps_prior_values() {
        let (_dir, store) = seeded_catalog(SEED);
        let before = store.load().unwrap();

        let (result, output) = run_menu(&store, "3\n2\n\n\nCrime\n8.5\n9\n");

        assert!(result.is_ok());
        assert!(output.contains("Current movie details:\nTitle: Heat\nYear: 1995\n"));
        assert!(output.contains("Movie updated successfully!"));

        let after = store.load().unwrap();
        assert_eq!(after[1].title, "Heat");
        assert_eq!(after[1].year, before[1].year);
        assert_eq!(after[1].genre, "Crime");
        assert_eq!(after[1].rating.to_string(), "8.5");
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn out_of_range_selection_returns_to_the_menu() {
        let (_dir, store) = seeded_catalog(SEED);

        let (result, output) = run_menu(&store, "3\n4\n7\n0\n9\n");

        assert!(result.is_ok());
        assert_eq!(output.matches("Invalid movie number!").count(), 2);
        assert_eq!(titles(&store), vec!["The Mask", "Heat", "Up"]);
    }

    #[test]
    fn non_numeric_selection_is_asked_again() {
        let (_dir, store) = seeded_catalog(SEED);

        let (_, output) = run_menu(&store, "7\nthird\n3\ny\n9\n");

        assert!(output.contains("Input valid number, please."));
        assert_eq!(titles(&store), vec!["The Mask", "Heat"]);
    }

    #[test]
    fn filter_by_genre_matches_whole_genre_names_ignoring_case() {
        let (_dir, store) = seeded_catalog(SEED);

        let (_, output) = run_menu(&store, "5\ncomedy\n5\nfantasy film\n9\n");

        assert!(output.contains("Movies in comedy genre:\n1. The Mask (1994)"));
        assert!(output.contains("2. Up (2009)"));
        assert!(!output.contains("Heat (1995)"));
        assert!(output.contains("No movies found in that genre!"));
    }

    #[test]
    fn search_finds_title_fragments() {
        let (_dir, store) = seeded_catalog(SEED);

        let (_, output) = run_menu(&store, "4\nhEa\n4\nAlien\n9\n");

        assert!(output.contains("Search Results:\n1. Heat (1995)"));
        assert!(output.contains("No movies found!"));
    }

    #[test]
    fn sort_by_rating_shows_highest_first() {
        let (_dir, store) = seeded_catalog(SEED);

        let (_, output) = run_menu(&store, "6\n9\n");

        let up = output.find("1. Up\n   Rating: 9/10").unwrap();
        let heat = output.find("2. Heat\n   Rating: 8/10").unwrap();
        let mask = output.find("3. The Mask\n   Rating: 7/10").unwrap();
        assert!(up < heat && heat < mask);
        // listing order on disk is unchanged
        assert_eq!(titles(&store), vec!["The Mask", "Heat", "Up"]);
    }

    #[test]
    fn statistics_report_mean_rating_and_genres() {
        let (_dir, store) = seeded_catalog(SEED);

        let (_, output) = run_menu(&store, "8\n9\n");

        assert!(output.contains("Total Movies: 3\n"));
        assert!(output.contains("Average Rating: 8.00\n"));
        assert!(output.contains(
            "Available Genres: Comedy, Fantasy, Crime, Thriller, Animation\n"
        ));
    }

    #[test]
    fn empty_catalog_is_reported() {
        let (_dir, store) = seeded_catalog(r#"{"movies": []}"#);

        let (result, output) = run_menu(&store, "1\n3\n8\n9\n");

        assert!(result.is_ok());
        assert_eq!(output.matches("No movies in database").count(), 2);
        assert!(output.contains("Average Rating: N/A"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let (_dir, store) = seeded_catalog(SEED);

        let (result, output) = run_menu(&store, "42\nhello\n9\n");

        assert!(result.is_ok());
        assert_eq!(output.matches("Invalid choice!").count(), 2);
        assert_eq!(output.matches("Enter your choice: ").count(), 3);
    }

    #[test]
    fn end_of_input_leaves_cleanly() {
        let (_dir, store) = seeded_catalog(SEED);

        let (result, output) = run_menu(&store, "2\nHalf a movie\n");

        assert!(result.is_ok());
        assert!(!output.contains("Goodbye!"));
        assert_eq!(titles(&store), vec!["The Mask", "Heat", "Up"]);
    }

    #[test]
    fn missing_catalog_aborts() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("movie.json"));

        let (result, _) = run_menu(&store, "1\n9\n");

        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn malformed_catalog_aborts() {
        let (_dir, store) = seeded_catalog("{\"movies\": [");

        let (result, _) = run_menu(&store, "8\n9\n");

        assert!(matches!(result, Err(CatalogError::Malformed { .. })));
    }

    #[test]
    fn export_writes_letterboxd_csv() {
        let (dir, store) = seeded_catalog(SEED);
        let export = dir.path().join("export.csv");
        let export_name = export.to_str().unwrap();

        let (result, output) = run_menu_exporting_to(&store, export_name, "10\n\n9\n");

        assert!(result.is_ok());
        assert!(output.contains(&format!("Exported 3 movies to {}", export_name)));
        let csv = fs::read_to_string(&export).unwrap();
        assert!(csv.starts_with("Title,Year,Rating10,Tags\n"));
        assert!(csv.contains("Heat,1995,8,\"Crime, Thriller\"\n"));
    }

    #[test]
    fn failed_export_returns_to_the_menu() {
        let (dir, store) = seeded_catalog(SEED);
        let bad = dir.path().join("no-such-dir").join("out.csv");

        let input = format!("10\n{}\n9\n", bad.display());
        let (result, output) = run_menu(&store, &input);

        assert!(result.is_ok());
        assert!(output.contains("Could not export movies"));
        assert!(!Path::new(&bad).exists());
    }

    #[test]
    fn unknown_fields_survive_a_rewrite() {
        let (_dir, store) = seeded_catalog(
            r#"{"movies":[{"title":"Heat","year":"1995","genre":"Crime","rating":"8","director":"Michael Mann"}]}"#,
        );

        run_menu(&store, "2\nUp\n2009\nAnimation\n9\n9\n");

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.file_path()).unwrap()).unwrap();
        assert_eq!(raw["movies"][0]["director"], "Michael Mann");
        assert_eq!(raw["movies"][1]["title"], "Up");
        let movies: Vec<Movie> = store.load().unwrap();
        assert_eq!(movies.len(), 2);
    }
}
