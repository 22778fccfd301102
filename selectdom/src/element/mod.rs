mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element whose custom data has `key` set to `value`, in tree order.
pub fn find_by_data<'a>(root: &'a Element, key: &str, value: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_data(root, key, value, &mut found);
    found
}

fn collect_by_data<'a>(element: &'a Element, key: &str, value: &str, found: &mut Vec<&'a Element>) {
    if element.get_data(key).map(String::as_str) == Some(value) {
        found.push(element);
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect_by_data(child, key, value, found);
        }
    }
}
