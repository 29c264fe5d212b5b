// SPDX-License-Identifier: MPL-2.0
//! Terminal demo of the gallery/paywall core.
//!
//! Walks the whole flow once: age gate, content load, category filter,
//! load-more, text search, sign-in, and a simulated subscription purchase,
//! printing each gallery state along the way.

use std::path::PathBuf;

use vitrine::application::port::CatalogSource;
use vitrine::application::query::GalleryView;
use vitrine::application::session::ProfileSession;
use vitrine::config;
use vitrine::domain::access::{Session, SubscriptionPlan};
use vitrine::domain::media::GalleryFilter;
use vitrine::error::Result;
use vitrine::i18n::I18n;
use vitrine::infrastructure::{DemoGateway, DemoIdentity, ManifestCatalog, SampleCatalog};
use vitrine::ui::render;

fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);
    let manifest_arg = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok())
        .map(PathBuf::from);

    let config = config::load().unwrap_or_default();
    let i18n = I18n::new(lang, &config);

    let catalog: Box<dyn CatalogSource> = match manifest_arg.or_else(|| config.manifest.clone()) {
        Some(path) => Box::new(ManifestCatalog::load(&path)?),
        None => Box::new(SampleCatalog::new()),
    };

    let mut profile =
        ProfileSession::new(catalog, DemoIdentity::default(), DemoGateway::new(), &config);

    profile.confirm_age();
    profile.load_content();

    print_gallery(&i18n, "gallery-photos-title", profile.photos(), profile.session());
    print_gallery(&i18n, "gallery-videos-title", profile.videos(), profile.session());

    // Category filter and one load-more round
    profile
        .photos_mut()
        .set_filter(GalleryFilter::from_label("exclusive"));
    print_gallery(&i18n, "gallery-photos-title", profile.photos(), profile.session());

    profile.photos_mut().set_filter(GalleryFilter::All);
    profile.photos_mut().show_more();
    print_gallery(&i18n, "gallery-photos-title", profile.photos(), profile.session());

    // Text search with no matches renders the placeholder card
    let session = profile.session().clone();
    let no_results = i18n.tr("gallery-no-results");
    let visible = profile
        .videos_mut()
        .set_filter(GalleryFilter::Search("zzz-no-match".to_string()));
    for card in render::search_cards(&visible, &session, &no_results) {
        println!("  - {}", card.title);
    }
    profile.videos_mut().set_filter(GalleryFilter::All);

    // Sign in and buy a subscription; premium cards unlock
    profile.sign_in();
    profile.purchase(SubscriptionPlan::Premium);
    print_gallery(&i18n, "gallery-photos-title", profile.photos(), profile.session());

    print_notifications(&i18n, &profile);
    Ok(())
}

fn print_gallery(i18n: &I18n, title_key: &str, gallery: &GalleryView, session: &Session) {
    let info = gallery.info();
    println!(
        "\n{} ({}/{})",
        i18n.tr(title_key),
        info.visible_count,
        info.matching_count
    );
    for card in render::cards(&gallery.visible_items(), session) {
        let lock = if card.locked { " 🔒" } else { "" };
        let badge = if card.premium { " 👑" } else { "" };
        match &card.duration {
            Some(duration) => println!("  - {} [{duration}]{badge}{lock}", card.title),
            None => println!("  - {}{badge}{lock}", card.title),
        }
    }
    if info.has_more {
        println!("  … {}", i18n.tr("gallery-load-more"));
    }
}

fn print_notifications<C, I, P>(i18n: &I18n, profile: &ProfileSession<C, I, P>) {
    for notification in profile.notifications().visible() {
        println!(
            "{} {}",
            notification.severity().symbol(),
            i18n.tr_with(notification.message_key(), notification.message_args())
        );
    }
}
