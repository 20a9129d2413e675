//! 站点规则

pub mod adobe_stock;
pub mod alamy;
pub mod artgrid;
pub mod artlist;
pub mod colourbox;
pub mod craftwork;
pub mod creative_fabrica;
pub mod creative_market;
pub mod depositphotos;
pub mod designi;
pub mod dreamstime;
pub mod envato_elements;
pub mod envato_market;
pub mod epidemic_sound;
pub mod flaticon;
pub mod footage_crate;
pub mod freepik;
pub mod getty_images;
pub mod iconscout;
pub mod istock;
pub mod lovepik;
pub mod mockup_cloud;
pub mod motion_array;
pub mod motion_elements;
pub mod pikbest;
pub mod pixel_squid;
pub mod placeit;
pub mod pngtree;
pub mod pond5;
pub mod rawpixel;
pub mod rf123;
pub mod shutterstock;
pub mod soundstripe;
pub mod stocksy;
pub mod storyblocks;
pub mod ui8;
pub mod uplabs;
pub mod vecteezy;
pub mod vector_stock;
pub mod yellow_images;

/// 收集注册的站点, 返回顺序即规则表顺序
///
/// 新站点只在末尾追加. 已有顺序承载语义, 不要按字母重排:
/// Flaticon 必须在 Freepik 之前 (Freepik 的宽松规则会命中 `/icon/` 页面).
pub(crate) fn registry_items() -> Vec<crate::table::ProviderRegistryItem> {
    vec![
        shutterstock::__PROVIDER_REGISTRY_SHUTTERSTOCK(),
        adobe_stock::__PROVIDER_REGISTRY_ADOBESTOCK(),
        flaticon::__PROVIDER_REGISTRY_FLATICON(),
        freepik::__PROVIDER_REGISTRY_FREEPIK(),
        istock::__PROVIDER_REGISTRY_ISTOCK(),
        getty_images::__PROVIDER_REGISTRY_GETTYIMAGES(),
        rf123::__PROVIDER_REGISTRY_RF123(),
        dreamstime::__PROVIDER_REGISTRY_DREAMSTIME(),
        depositphotos::__PROVIDER_REGISTRY_DEPOSITPHOTOS(),
        envato_elements::__PROVIDER_REGISTRY_ENVATOELEMENTS(),
        envato_market::__PROVIDER_REGISTRY_ENVATOMARKET(),
        motion_array::__PROVIDER_REGISTRY_MOTIONARRAY(),
        storyblocks::__PROVIDER_REGISTRY_STORYBLOCKS(),
        motion_elements::__PROVIDER_REGISTRY_MOTIONELEMENTS(),
        pond5::__PROVIDER_REGISTRY_POND5(),
        vecteezy::__PROVIDER_REGISTRY_VECTEEZY(),
        rawpixel::__PROVIDER_REGISTRY_RAWPIXEL(),
        pngtree::__PROVIDER_REGISTRY_PNGTREE(),
        lovepik::__PROVIDER_REGISTRY_LOVEPIK(),
        pikbest::__PROVIDER_REGISTRY_PIKBEST(),
        alamy::__PROVIDER_REGISTRY_ALAMY(),
        iconscout::__PROVIDER_REGISTRY_ICONSCOUT(),
        epidemic_sound::__PROVIDER_REGISTRY_EPIDEMICSOUND(),
        artlist::__PROVIDER_REGISTRY_ARTLIST(),
        artgrid::__PROVIDER_REGISTRY_ARTGRID(),
        soundstripe::__PROVIDER_REGISTRY_SOUNDSTRIPE(),
        creative_fabrica::__PROVIDER_REGISTRY_CREATIVEFABRICA(),
        creative_market::__PROVIDER_REGISTRY_CREATIVEMARKET(),
        ui8::__PROVIDER_REGISTRY_UI8(),
        yellow_images::__PROVIDER_REGISTRY_YELLOWIMAGES(),
        vector_stock::__PROVIDER_REGISTRY_VECTORSTOCK(),
        designi::__PROVIDER_REGISTRY_DESIGNI(),
        mockup_cloud::__PROVIDER_REGISTRY_MOCKUPCLOUD(),
        footage_crate::__PROVIDER_REGISTRY_FOOTAGECRATE(),
        uplabs::__PROVIDER_REGISTRY_UPLABS(),
        pixel_squid::__PROVIDER_REGISTRY_PIXELSQUID(),
        placeit::__PROVIDER_REGISTRY_PLACEIT(),
        stocksy::__PROVIDER_REGISTRY_STOCKSY(),
        colourbox::__PROVIDER_REGISTRY_COLOURBOX(),
        craftwork::__PROVIDER_REGISTRY_CRAFTWORK(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Provider;

    #[test]
    fn test_registry_matches_provider_impls() {
        let items = registry_items();
        assert_eq!(items.len(), 40);

        let provider = shutterstock::Shutterstock;
        assert_eq!(items[0].name, provider.name());
        assert_eq!(items[0].rules, provider.rules());
        assert_eq!(
            provider.keys(),
            ["vshutter", "mshutter", "shutterstock_editorial", "shutterstock"]
        );

        assert_eq!(adobe_stock::AdobeStock.rules().len(), 4);
        assert_eq!(
            motion_array::MotionArray.rules()[0].extract,
            crate::models::Extract::Candidates(&[1, 2])
        );
    }

    #[test]
    fn test_flaticon_before_freepik() {
        let names: Vec<&str> = registry_items().iter().map(|i| i.name).collect();
        let flaticon = names.iter().position(|n| *n == "Flaticon").unwrap();
        let freepik = names.iter().position(|n| *n == "Freepik").unwrap();
        assert!(flaticon < freepik);
    }
}
