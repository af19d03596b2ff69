use tm_web::app_root::app_root;

fn main() {
    tm_web::app::logging::init();
    dioxus::launch(app_root);
}
