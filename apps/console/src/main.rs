//! Scripted storefront session against the in-memory shop.
//!
//! Exercises the full boundary surface in one run: register, browse,
//! admin offer management, cart mutation, checkout, order list. Useful as
//! a smoke check and as executable documentation of the operation flow.

use std::error::Error;

use tracing::info;

use souq_api::ops::admin::{self, ApplyOfferInput};
use souq_api::ops::auth::{self, LoginInput, RegisterInput};
use souq_api::ops::cart::{self, AddToCartInput};
use souq_api::ops::checkout::{self, CheckoutInput};
use souq_api::ops::products::{self, ListProductsInput};
use souq_api::{init_tracing, SharedShop, ShopConfig};

fn heading(title: &str) {
    println!("\n=== {title} ===");
}

fn show<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = ShopConfig::load()?;
    let shop = SharedShop::from_config(&config);
    info!(seed_demo_catalog = config.seed_demo_catalog, "shop ready");

    heading("Register customer");
    let session = auth::register(
        &shop,
        RegisterInput {
            username: "ali".to_string(),
            password: "pw".to_string(),
        },
    )?;
    show(&session)?;

    heading("Admin login");
    let admin_session = auth::login(
        &shop,
        LoginInput {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        },
    )?;
    show(&admin_session)?;

    heading("Admin: 20% off the headphones, free case, limit 3 per customer");
    let offered = admin::apply_offer(
        &shop,
        ApplyOfferInput {
            acting_user: admin_session.username.clone(),
            product_id: 104,
            discount_pct: 20.0,
            gift: Some("Carry Case".to_string()),
            limit: 3,
        },
    )?;
    show(&offered)?;

    heading("Offers page");
    let offers = products::list_products(&shop, ListProductsInput { offers_only: true });
    show(&offers)?;

    heading("Product page for the customer");
    let detail = products::get_product_detail(&shop, &session.username, 104)?;
    show(&detail)?;

    heading("Add to cart: 2 headphones, 1 backpack");
    cart::add_to_cart(
        &shop,
        AddToCartInput {
            username: session.username.clone(),
            product_id: 104,
            qty: 2,
        },
    )?;
    let cart_view = cart::add_to_cart(
        &shop,
        AddToCartInput {
            username: session.username.clone(),
            product_id: 506,
            qty: 1,
        },
    )?;
    show(&cart_view)?;

    heading("Offer limit in action (2 in cart, limit 3, asking for 2 more)");
    let rejection = cart::add_to_cart(
        &shop,
        AddToCartInput {
            username: session.username.clone(),
            product_id: 104,
            qty: 2,
        },
    )
    .expect_err("ceiling must reject this add");
    show(&rejection)?;

    heading("Checkout");
    let receipt = checkout::checkout(
        &shop,
        CheckoutInput {
            username: session.username.clone(),
            address: "12 Harbor St".to_string(),
            payment_method: "Online Payment".to_string(),
        },
    )?;
    show(&receipt)?;

    heading("Admin: order ledger");
    let orders = admin::list_orders(&shop, &admin_session.username)?;
    show(&orders)?;

    Ok(())
}
