//! Tests for the startup prompt sequence

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tilemap_editor::EditorError;
    use tilemap_editor::io::prompt::Prompter;
    use tilemap_editor::spatial::GridSize;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    fn transcript(prompter: Prompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    // Tests empty answers select a new map and the default output
    #[test]
    fn test_empty_answers_use_defaults() {
        let mut p = prompter("\n\n");
        assert_eq!(p.input_file().unwrap(), None);
        assert_eq!(p.output_file().unwrap(), PathBuf::from("map.h"));

        let text = transcript(p);
        assert!(text.contains("Enter input map filename"));
        assert!(text.contains("(default: map.h)"));
    }

    // Tests answers are trimmed and used as paths
    #[test]
    fn test_named_files() {
        let mut p = prompter("  levels/one.h \nout.h\n");
        assert_eq!(p.input_file().unwrap(), Some(PathBuf::from("levels/one.h")));
        assert_eq!(p.output_file().unwrap(), PathBuf::from("out.h"));
    }

    // Tests invalid sizes are reported and asked again
    // Verified by returning the first parse error instead of looping
    #[test]
    fn test_map_size_reprompts() {
        let mut p = prompter("abc\n0\n-4\n12\n");
        assert_eq!(
            p.map_size().unwrap(),
            GridSize {
                width: 12,
                height: 12
            }
        );

        let text = transcript(p);
        assert_eq!(text.matches("Enter MAX MAP SIZE: ").count(), 4);
        assert!(text.contains("not a whole number"));
        assert!(text.contains("Invalid grid size 0x0"));
    }

    // Tests the input closing before a size is an error
    #[test]
    fn test_map_size_end_of_input() {
        let mut p = prompter("nope\n");
        assert!(matches!(
            p.map_size(),
            Err(EditorError::InvalidParameter { parameter: "size", .. })
        ));
    }

    // Tests end of input on the file questions falls back to defaults
    #[test]
    fn test_file_questions_at_end_of_input() {
        let mut p = prompter("");
        assert_eq!(p.input_file().unwrap(), None);
        assert_eq!(p.output_file().unwrap(), PathBuf::from("map.h"));
        assert_eq!(p.ask("anything? ").unwrap(), None);
    }
}
