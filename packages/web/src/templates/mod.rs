//! Server-rendered HTML pages.
//!
//! Every page goes through [`layout`], which draws the navigation (it differs
//! for logged-in users), the flash banner and the footer.

pub mod account;
pub mod snippets;
pub mod users;

use chrono::{DateTime, TimeZone, Utc};
use maud::{html, Markup, DOCTYPE};
use services::validation::Validator;

use crate::session::{Flash, CSRF_FIELD};

/// Stylesheet served at `/static/css/main.css`.
pub const MAIN_CSS: &str = r#"
*{box-sizing:border-box;margin:0;padding:0;font-size:18px;font-family:"Ubuntu Mono",monospace}
html,body{height:100%}
body{line-height:1.5;background-color:#f1f3f6;color:#34495e;overflow-y:scroll}
header,nav,main,footer{padding:2px calc((100% - 800px) / 2) 0}
main{margin-top:54px;margin-bottom:54px;min-height:calc(100vh - 345px);overflow:auto}
h1 a{font-size:36px;font-weight:bold;color:#34495e;text-decoration:none}
h2{font-size:22px;margin-bottom:36px;position:relative;top:-9px}
a{color:#62cb31;text-decoration:none}
a:hover{color:#4eb722;text-decoration:underline}
header{background-image:linear-gradient(to right,#34495e,#34495e 25%,#9b59b6 25%,#9b59b6 35%,#3498db 35%,#3498db 45%,#62cb31 45%,#62cb31 55%,#ffb606 55%,#ffb606 65%,#e67e22 65%,#e67e22 75%,#e74c3c 85%,#e74c3c 85%,#c0392b 85%,#c0392b 100%);background-size:100% 6px;background-repeat:no-repeat;border-bottom:1px solid #e4e5e7;overflow:auto;padding-top:33px;padding-bottom:27px;text-align:center}
nav{border-bottom:1px solid #e4e5e7;padding-top:17px;padding-bottom:15px;background:#f7f9fa;height:60px;color:#6a6c6f}
nav a{margin-right:1.5em;display:inline-block}
nav form{display:inline-block;margin-left:1.5em}
nav div{width:50%;float:left}
nav div:last-child{text-align:right}
nav div:last-child a{margin-left:1.5em;margin-right:0}
nav a.live{color:#34495e;cursor:default}
nav a.live:hover{text-decoration:none}
form div{margin-bottom:18px}
form div:last-child{border-top:1px dashed #e4e5e7}
form input[type="radio"]{margin-left:18px}
form input[type="text"],form input[type="password"],form input[type="email"]{padding:.75em 18px;width:100%}
form input[type=text],form input[type="password"],form input[type="email"],textarea{color:#6a6c6f;background:#ffffff;border:1px solid #e4e5e7;border-radius:3px}
form label{display:inline-block;margin-bottom:9px}
.error{color:#c0392b;font-weight:bold;display:block}
.error+textarea,.error+input{border-color:#c0392b !important;border-width:2px !important}
textarea{padding:18px;width:100%;height:266px}
button,input[type="submit"]{background:#62cb31;border-radius:3px;color:#ffffff;padding:18px 27px;border:none;display:inline-block;margin-top:18px;font-weight:700}
button:hover,input[type="submit"]:hover{background-color:#4eb722;color:#ffffff;cursor:pointer;text-decoration:none}
nav form button{background:none;color:#62cb31;padding:0;margin:0;font-weight:normal}
nav form button:hover{background:none;color:#4eb722;text-decoration:underline}
.snippet{background-color:#ffffff;border:1px solid #e4e5e7;border-radius:3px}
.snippet pre{padding:18px;border-top:1px solid #e4e5e7;border-bottom:1px solid #e4e5e7}
.snippet .metadata{background-color:#f7f9fa;color:#6a6c6f;padding:.75em 18px;overflow:auto}
.snippet .metadata span{float:right}
.snippet .metadata strong{color:#34495e}
.snippet .metadata time{display:inline-block}
.snippet .metadata time:first-child{float:left}
.snippet .metadata time:last-child{float:right}
div.flash{color:#ffffff;font-weight:bold;background-color:#34495e;padding:18px;margin-bottom:36px;text-align:center}
div.error{color:#ffffff;background-color:#c0392b;padding:18px;margin-bottom:36px;font-weight:bold;text-align:center}
table{background:white;border:1px solid #e4e5e7;border-collapse:collapse;width:100%}
td,th{text-align:left;padding:9px 18px}
th:last-child,td:last-child{text-align:right;color:#6a6c6f}
tr{border-bottom:1px solid #e4e5e7}
tr:nth-child(2n){background-color:#f7f9fa}
footer{border-top:1px solid #e4e5e7;padding-top:17px;padding-bottom:15px;background:#f7f9fa;height:60px;color:#6a6c6f;text-align:center}
"#;

/// Per-request values every page needs.
#[derive(Clone, Debug)]
pub struct TemplateData {
    pub current_year: i32,
    pub flash: Option<Flash>,
    pub is_authenticated: bool,
    pub csrf_token: String,
}

/// Formats a timestamp as `02 Jan 2006 at 15:04`, always in UTC.
pub fn human_date<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    t.with_timezone(&Utc).format("%d %b %Y at %H:%M").to_string()
}

pub fn csrf_input(data: &TemplateData) -> Markup {
    html! {
        input type="hidden" name=(CSRF_FIELD) value=(data.csrf_token);
    }
}

pub fn field_error(validator: &Validator, field: &str) -> Markup {
    html! {
        @if let Some(message) = validator.field_error(field) {
            label class="error" { (message) }
        }
    }
}

pub fn non_field_errors(validator: &Validator) -> Markup {
    html! {
        @for message in validator.non_field_errors() {
            div class="error" { (message) }
        }
    }
}

fn nav(data: &TemplateData) -> Markup {
    html! {
        nav {
            div {
                a href="/" { "Home" }
                @if data.is_authenticated {
                    a href="/snippet/create" { "Create snippet" }
                }
            }
            div {
                @if data.is_authenticated {
                    a href="/account/view" { "Account" }
                    form action="/user/logout" method="POST" {
                        (csrf_input(data))
                        button { "Logout" }
                    }
                } @else {
                    a href="/user/signup" { "Signup" }
                    a href="/user/login" { "Login" }
                }
            }
        }
    }
}

/// Base layout shared by every page.
pub fn layout(data: &TemplateData, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Snippetbox" }
                link rel="stylesheet" href="/static/css/main.css";
                link rel="stylesheet" href="https://fonts.googleapis.com/css?family=Ubuntu+Mono:400,700";
            }
            body {
                header {
                    h1 { a href="/" { "Snippetbox" } }
                }
                (nav(data))
                main {
                    @if let Some(flash) = data.flash {
                        div class="flash" { (flash.message()) }
                    }
                    (content)
                }
                footer {
                    "Powered by " a href="https://www.rust-lang.org/" { "Rust" } " in " (data.current_year)
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn test_data(is_authenticated: bool) -> TemplateData {
    TemplateData {
        current_year: 2023,
        flash: None,
        is_authenticated,
        csrf_token: "token123".to_string(),
    }
}
