use locator_recorder::dom::dom_model::{Document, NodeId, Viewport};

/// A login-ish page exercising every derivation branch:
///
/// ```text
/// html
/// └── body
///     ├── div#main (class="container")
///     │   └── form (name="login")
///     │       ├── input#user (name="username")
///     │       ├── input (type="password", name="password", class="pw wide")
///     │       ├── select (name="role")
///     │       └── button (type="submit") "Sign in"
///     ├── ul (class="nav")
///     │   ├── li ── a (class="nav primary") "Home Page"
///     │   └── li ── a (href="#about") "About"
///     └── p "Plain paragraph" (with a nested text node)
/// ```
pub struct LoginPage {
    pub doc: Document,
    pub body: NodeId,
    pub user_input: NodeId,
    pub password_input: NodeId,
    pub role_select: NodeId,
    pub submit_button: NodeId,
    pub first_item: NodeId,
    pub second_item: NodeId,
    pub home_link: NodeId,
    pub about_link: NodeId,
    pub paragraph: NodeId,
    pub text_node: NodeId,
}

pub fn login_page() -> LoginPage {
    let mut doc = Document::new();

    let html = doc.append_element(None, "html", &[]);
    let body = doc.append_element(Some(html), "body", &[]);

    let main = doc.append_element(Some(body), "div", &[("id", "main"), ("class", "container")]);
    let form = doc.append_element(Some(main), "form", &[("name", "login")]);
    let user_input = doc.append_element(
        Some(form),
        "input",
        &[("id", "user"), ("name", "username")],
    );
    let password_input = doc.append_element(
        Some(form),
        "input",
        &[
            ("type", "password"),
            ("name", "password"),
            ("class", "pw wide"),
        ],
    );
    let role_select = doc.append_element(Some(form), "select", &[("name", "role")]);
    let submit_button = doc.append_element(Some(form), "button", &[("type", "submit")]);
    doc.append_text(submit_button, "Sign in");

    let nav_list = doc.append_element(Some(body), "ul", &[("class", "nav")]);
    let first_item = doc.append_element(Some(nav_list), "li", &[]);
    let home_link = doc.append_element(Some(first_item), "a", &[("class", "nav primary")]);
    doc.append_text(home_link, "Home Page");
    let second_item = doc.append_element(Some(nav_list), "li", &[]);
    let about_link = doc.append_element(Some(second_item), "a", &[("href", "#about")]);
    doc.append_text(about_link, "About");

    let paragraph = doc.append_element(Some(body), "p", &[]);
    let text_node = doc.append_text(paragraph, "Plain paragraph");

    LoginPage {
        doc,
        body,
        user_input,
        password_input,
        role_select,
        submit_button,
        first_item,
        second_item,
        home_link,
        about_link,
        paragraph,
        text_node,
    }
}

pub fn viewport() -> Viewport {
    Viewport {
        width: 1280.0,
        height: 800.0,
    }
}
