use super::*;

#[test]
fn writes_self_closing_and_nested_elements() {
    let node = SvgNode::group()
        .attr("id", "a")
        .child(SvgNode::new("circle").num("r", 2.5));
    assert_eq!(node.to_markup(), r#"<g id="a"><circle r="2.5"/></g>"#);
}

#[test]
fn escapes_attribute_values() {
    let node = SvgNode::new("text").attr("data-x", "a<b & \"c\"");
    assert_eq!(
        node.to_markup(),
        r#"<text data-x="a&lt;b &amp; &quot;c&quot;"/>"#
    );
}

#[test]
fn document_adds_namespace_once() {
    let doc = SvgNode::new("svg").num("width", 10.0).to_document();
    assert_eq!(doc, format!(r#"<svg xmlns="{SVG_NS}" width="10"/>"#));
}

#[test]
fn identity_transform_is_not_wrapped() {
    let node = SvgNode::new("rect");
    assert_eq!(node.clone().transformed(kurbo::Affine::IDENTITY), node);

    let moved = node.transformed(kurbo::Affine::translate((3.0, 4.0)));
    assert_eq!(moved.name(), "g");
    assert_eq!(moved.get_attr("transform"), Some("matrix(1,0,0,1,3,4)"));
}

#[test]
fn text_content_is_escaped() {
    let node = SvgNode::new("title").text("Sun & <moon>");
    assert_eq!(node.to_markup(), "<title>Sun &amp; &lt;moon&gt;</title>");
}
