pub mod csv_writer;
