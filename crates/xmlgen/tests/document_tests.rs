use xmlgen::{
    attributes, document, document_full, document_with, element, element_content, element_with,
    Doctype, Shape, PROLOG,
};

#[test]
fn test_single_root_document() -> Result<(), Box<dyn std::error::Error>> {
    let output = document_with("person", "Josh")?;
    assert_eq!(
        output,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<person>Josh</person>"
    );
    Ok(())
}

#[test]
fn test_document_with_attributes_only() -> Result<(), Box<dyn std::error::Error>> {
    let output = document_with("person", attributes([("id", 12)]))?;
    assert_eq!(output, format!("{PROLOG}\n<person id=\"12\"/>"));
    Ok(())
}

#[test]
fn test_document_full() -> Result<(), Box<dyn std::error::Error>> {
    let output = document_full(
        "person",
        attributes([("occupation", "Developer")]),
        vec![element_with("name", "Josh")],
    )?;
    assert_eq!(
        output,
        format!("{PROLOG}\n<person occupation=\"Developer\">\n\t<name>Josh</name>\n</person>")
    );
    Ok(())
}

#[test]
fn test_doctype_system_follows_prolog() -> Result<(), Box<dyn std::error::Error>> {
    let output = document(vec![
        Shape::Doctype(Doctype::system("greeting", "hello.dtd")),
        element_with("greeting", "Hello, world!"),
    ])?;
    assert_eq!(
        output,
        format!(
            "{PROLOG}\n<!DOCTYPE greeting SYSTEM \"hello.dtd\">\n<greeting>Hello, world!</greeting>"
        )
    );
    Ok(())
}

#[test]
fn test_doctype_public_follows_prolog() -> Result<(), Box<dyn std::error::Error>> {
    let output = document(vec![
        Doctype::public(
            "html",
            "-//W3C//DTD XHTML 1.0 Transitional//EN",
            "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd",
        )
        .into(),
        element_content("html", vec![element("head"), element("body")]),
    ])?;
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some(PROLOG));
    assert_eq!(
        lines.next(),
        Some("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">")
    );
    assert_eq!(lines.next(), Some("<html>"));
    assert_eq!(lines.next(), Some("\t<head/>"));
    assert_eq!(lines.next(), Some("\t<body/>"));
    assert_eq!(lines.next(), Some("</html>"));
    assert_eq!(lines.next(), None);
    Ok(())
}

#[test]
fn test_multi_root_document() -> Result<(), Box<dyn std::error::Error>> {
    let output = document(vec![element("first"), element_with("second", 2)])?;
    assert_eq!(output, format!("{PROLOG}\n<first/>\n<second>2</second>"));
    Ok(())
}

#[test]
fn test_one_item_list_is_a_single_root() -> Result<(), Box<dyn std::error::Error>> {
    let output = document(vec![element("only")])?;
    assert_eq!(output, format!("{PROLOG}\n<only/>"));
    Ok(())
}

#[test]
fn test_doctype_must_be_first() {
    let result = document(vec![
        element("greeting"),
        Shape::Doctype(Doctype::system("greeting", "hello.dtd")),
    ]);
    assert!(result.is_err());
}
