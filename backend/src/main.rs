use backend::config;

#[rocket::launch]
async fn rocket() -> _ {
    config::load_environment();
    config::init_logger();

    let state = config::create_app_state()
        .await
        .expect("Application state setup failed.");
    let cors = config::create_cors().expect("CORS configuration failed.");

    backend::build_rocket(state).attach(cors)
}
