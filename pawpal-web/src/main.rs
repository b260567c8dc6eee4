fn main() {
    dioxus::launch(pawpal_web::App);
}
