/// Make serialized JSON safe to embed inside a `<script>` element.
///
/// Every `<` becomes `\u003c`, which JSON and JavaScript both read back as
/// `<`, so a value can neither close the element nor open `<!--`.
pub fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}
