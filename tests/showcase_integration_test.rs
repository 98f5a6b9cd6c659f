use hello_basics::{DemoConfig, MemorySink, Person, Showcase, ShowcaseInputs, WriterSink};
use std::io::Write;
use tempfile::NamedTempFile;

const DEFAULT_OUTPUT: &str = "Hello, World!\n\
Sum of numbers [1, 2, 3, 4, 5]: 15\n\
First 5 square numbers: [0, 1, 4, 9, 16]\n\
Person details: {'name': 'Alice', 'age': 30, 'city': 'Python Land'}\n";

#[test]
fn test_default_showcase_writes_exact_output() {
    let mut sink = WriterSink::new(Vec::new());
    let written = Showcase::default().run(&mut sink).unwrap();

    assert_eq!(written, 4);
    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), DEFAULT_OUTPUT);
}

#[test]
fn test_showcase_from_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[greeting]
name = "Rustacean"

[summation]
numbers = [10, -4, 6]

[squares]
count = 3

[person]
name = "O'Brien"
age = 41
city = "Crab\tCity"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let inputs = DemoConfig::from_file(temp_file.path()).unwrap().into_inputs();
    let mut sink = MemorySink::new();
    Showcase::new(inputs).run(&mut sink).unwrap();

    assert_eq!(
        sink.into_lines(),
        vec![
            "Hello, Rustacean!",
            "Sum of numbers [10, -4, 6]: 12",
            "First 3 square numbers: [0, 1, 4]",
            "Person details: {'name': \"O'Brien\", 'age': 41, 'city': 'Crab\\tCity'}",
        ]
    );
}

#[test]
fn test_custom_person_keeps_field_order() {
    let inputs = ShowcaseInputs {
        person: Person {
            name: "Bob".to_string(),
            age: 0,
            city: String::new(),
        },
        ..ShowcaseInputs::default()
    };

    let lines = Showcase::render(&inputs).unwrap();
    assert_eq!(lines[3], "Person details: {'name': 'Bob', 'age': 0, 'city': ''}");
}
