// Example demonstrating building a tree with the mutator API and
// serializing it, with a custom scratch configuration for re-parsing.

use jsontree::{parse_with_config, ParseError, ScratchSizes, Value};

// Long strings and wide arrays: start the scratch stacks large
type WideConfig = ScratchSizes<4096, 64, 16>;

fn main() -> Result<(), ParseError> {
    env_logger::init();

    let mut doc = Value::new();
    doc.set_object(3);
    doc.push_object_member(b"title").set_string(b"Quarterly \"report\"");

    let totals = doc.push_object_member(b"totals");
    totals.set_array(4);
    for n in [120.0, 98.5, -3.25, 1e21] {
        totals.push_array_element().set_number(n);
    }

    let meta = doc.push_object_member(b"meta");
    meta.set_object(2);
    meta.push_object_member(b"draft").set_boolean(false);
    meta.push_object_member(b"reviewer").set_null();

    let text = doc.stringify();
    println!("Built:    {}", String::from_utf8_lossy(&text));

    let mut reparsed = Value::new();
    parse_with_config::<WideConfig>(&mut reparsed, &text)?;
    println!("Reparsed: {}", reparsed);
    println!("Equal:    {}", reparsed == doc);

    // Replacing a member's payload releases the old subtree first
    doc.get_object_value_mut(1).set_string(b"withdrawn");
    println!("Edited:   {}", doc);

    doc.deep_free();
    println!("Freed:    {}", doc);
    Ok(())
}
