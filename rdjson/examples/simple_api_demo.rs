// Example demonstrating the document API

use rdjson::{parse, ParseError, Value};

fn describe(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(members) => {
            println!("{pad}Object ({} members)", members.len());
            for (key, member) in members {
                println!("{pad}  Key: '{key}'");
                describe(member, indent + 2);
            }
        }
        Value::Array(items) => {
            println!("{pad}Array ({} items)", items.len());
            for item in items {
                describe(item, indent + 1);
            }
        }
        Value::String(s) => println!("{pad}String: '{s}'"),
        Value::Number(num) => println!("{pad}Number: {num}"),
        Value::Bool(b) => println!("{pad}Bool: {b}"),
        Value::Null => println!("{pad}Null"),
    }
}

fn main() -> Result<(), ParseError> {
    let json = r#"{"name": "value", "number": 42, "ratio": 0.25, "flag": true, "tags": ["a", null]}"#;
    println!("Input: {}", json);
    describe(&parse(json)?, 0);

    println!();
    for bad in ["[1, 2,]", r#"{"a" 1}"#, "\"scalar\"", "[\"\\uDE00\"]"] {
        match parse(bad) {
            Ok(_) => println!("{bad:<12} unexpectedly parsed"),
            Err(e) => println!("{bad:<12} SyntaxError: {e}"),
        }
    }
    Ok(())
}
