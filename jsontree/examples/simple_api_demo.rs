// Example demonstrating parsing a document and walking the tree
//
// Run with RUST_LOG=trace to see the parser's scratch stack activity.

use jsontree::{parse, ParseError, Value, ValueType};

fn print_value(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value.get_type() {
        ValueType::Array => {
            println!("{pad}Array ({} elements)", value.get_array_size());
            for i in 0..value.get_array_size() {
                print_value(value.get_array_element(i), indent + 1);
            }
        }
        ValueType::Object => {
            println!("{pad}Object ({} members)", value.get_object_size());
            for i in 0..value.get_object_size() {
                println!(
                    "{pad}  Key: '{}'",
                    String::from_utf8_lossy(value.get_object_key(i))
                );
                print_value(value.get_object_value(i), indent + 2);
            }
        }
        ValueType::String => println!(
            "{pad}String: '{}'",
            String::from_utf8_lossy(value.get_string())
        ),
        ValueType::Number => println!("{pad}Number: {}", value.get_number()),
        ValueType::True | ValueType::False => println!("{pad}Bool: {}", value.get_boolean()),
        ValueType::Null => println!("{pad}Null"),
    }
}

fn main() -> Result<(), ParseError> {
    env_logger::init();

    let json = r#"{"name": "value", "number": 42, "flag": true, "list": [1.5, null, "\u00e9"]}"#;
    println!("Input: {}", json);

    let mut value = Value::new();
    parse(&mut value, json)?;
    print_value(&value, 0);
    println!("Compact: {}", value);

    println!();
    for broken in ["[1, 2", r#"{"key" 1}"#, r#""\uD800""#, "1e400"] {
        match parse(&mut value, broken) {
            Ok(()) => println!("{broken:>12} -> parsed"),
            Err(e) => println!("{broken:>12} -> {e} ({e:?}), root is {}", value.get_type()),
        }
    }
    Ok(())
}
