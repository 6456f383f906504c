pub mod line_extractor;
