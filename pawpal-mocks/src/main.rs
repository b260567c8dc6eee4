fn main() {
    dioxus::launch(pawpal_mocks::App);
}
