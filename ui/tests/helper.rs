use formwright_ui::view::View;

pub fn write<V: View>(filename: &str, view: V) -> String {
    let target = concat!(env!("CARGO_TARGET_TMPDIR"), "/style.css");
    std::fs::write(target, formwright_ui::asset::STYLE_CSS_CONTENT).unwrap();

    let output = view.render();
    let target = format!("{}/{filename}", env!("CARGO_TARGET_TMPDIR"));
    std::fs::write(target, &output).unwrap();
    output
}
