fn main() {
    dioxus::launch(scout_web::App);
}
