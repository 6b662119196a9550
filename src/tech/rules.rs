//! Technology signature table.
//!
//! Rules are evaluated in table order. For exclusive categories the first matching
//! rule wins; for every other category each matching rule contributes its name once.
//! All HTML and header needles are lowercase.

use crate::config::{
    HEADER_SERVER, HEADER_VIA, HEADER_X_GENERATOR, HEADER_X_POWERED_BY, HEADER_X_SERVED_BY,
};

/// Where a technology leaves its fingerprint.
#[derive(Debug, Clone, Copy)]
pub enum Signal {
    /// Substring of the lowercased HTML
    Html(&'static str),
    /// At least one element matches this CSS selector
    Selector(&'static str),
    /// Header `.0` is present and its lowercased value contains `.1`
    Header(&'static str, &'static str),
    /// Header is present, whatever its value
    HeaderPresent(&'static str),
    /// The `generator` meta content contains this needle
    Generator(&'static str),
}

/// Report category a rule contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cms,
    Framework,
    Language,
    Database,
    CloudPlatform,
    CssFramework,
    Preprocessor,
    StaticGenerator,
    BuildTool,
    MicroFramework,
    Ecommerce,
    JsLibrary,
}

impl Category {
    /// Single-valued categories, decided by the first matching rule.
    pub fn is_exclusive(self) -> bool {
        matches!(self, Category::Cms | Category::CloudPlatform)
    }
}

#[derive(Debug)]
pub struct TechRule {
    pub category: Category,
    pub name: &'static str,
    /// The rule matches when any signal matches
    pub signals: &'static [Signal],
}

/// Overrides a prior exclusive match when extra evidence is present.
#[derive(Debug)]
pub struct Refinement {
    pub category: Category,
    pub when: &'static str,
    pub becomes: &'static str,
    pub signals: &'static [Signal],
}

use Category::*;
use Signal::*;

const fn rule(category: Category, name: &'static str, signals: &'static [Signal]) -> TechRule {
    TechRule {
        category,
        name,
        signals,
    }
}

#[rustfmt::skip]
pub const TECH_RULES: &[TechRule] = &[
    // CMS, in priority order
    rule(Cms, "WordPress", &[
        Html("/wp-content/"),
        Html("/wp-includes/"),
        Html("wp-json"),
        Generator("wordpress"),
        HeaderPresent("x-pingback"),
    ]),
    rule(Cms, "Joomla", &[
        Generator("joomla"),
        Html("/media/jui/"),
        Html("/components/com_"),
        Html("joomla!"),
    ]),
    rule(Cms, "Drupal", &[
        Generator("drupal"),
        Html("drupal-settings-json"),
        Html("/sites/default/files/"),
        Header(HEADER_X_GENERATOR, "drupal"),
        HeaderPresent("x-drupal-cache"),
    ]),
    rule(Cms, "Shopify", &[
        Html("cdn.shopify.com"),
        Html("shopify.theme"),
        HeaderPresent("x-shopid"),
        HeaderPresent("x-shopify-stage"),
    ]),
    rule(Cms, "Wix", &[
        Html("static.wixstatic.com"),
        Html("wix.com website builder"),
        Generator("wix.com"),
        HeaderPresent("x-wix-request-id"),
    ]),
    rule(Cms, "Squarespace", &[
        Html("static1.squarespace.com"),
        Html("squarespace-cdn.com"),
        Generator("squarespace"),
    ]),
    rule(Cms, "Webflow", &[
        Html("data-wf-page"),
        Html("webflow.js"),
        Generator("webflow"),
    ]),
    rule(Cms, "Tilda", &[
        Html("tildacdn.com"),
        Html("tilda-blocks"),
        Generator("tilda"),
    ]),
    rule(Cms, "Magento", &[
        Html("mage/cookies"),
        Html("/static/frontend/"),
        Html("magento_"),
        HeaderPresent("x-magento-cache-debug"),
    ]),
    rule(Cms, "OpenCart", &[
        Html("catalog/view/theme"),
        Html("index.php?route="),
    ]),
    rule(Cms, "PrestaShop", &[
        Generator("prestashop"),
        Html("/modules/ps_"),
        Html("prestashop"),
    ]),
    rule(Cms, "1C-Bitrix", &[
        Html("/bitrix/"),
        Header("x-powered-cms", "bitrix"),
    ]),
    rule(Cms, "Ghost", &[
        Generator("ghost"),
        Html("/ghost/api/"),
    ]),
    rule(Cms, "TYPO3", &[
        Generator("typo3"),
        Html("typo3conf/"),
        Html("typo3temp/"),
    ]),
    rule(Cms, "Blogger", &[
        Generator("blogger"),
        Html("blogger.com/static"),
    ]),
    rule(Cms, "Weebly", &[
        Html("editmysite.com"),
        Html("weebly.com"),
    ]),
    rule(Cms, "Craft CMS", &[
        Header(HEADER_X_POWERED_BY, "craft cms"),
        Html("cpresources/"),
    ]),
    rule(Cms, "MODX", &[
        Generator("modx"),
        Html("assets/components/"),
    ]),
    rule(Cms, "Umbraco", &[
        Generator("umbraco"),
        Html("/umbraco/"),
    ]),
    rule(Cms, "DataLife Engine", &[
        Generator("datalife engine"),
        Html("engine/classes/"),
    ]),
    rule(Cms, "HubSpot CMS", &[
        Generator("hubspot"),
        Html("hs-sites.com"),
        HeaderPresent("x-hs-hub-id"),
    ]),
    rule(Cms, "Horoshop", &[
        Html("horoshop"),
    ]),

    // Frameworks
    rule(Framework, "Next.js", &[
        Html("__next_data__"),
        Html("/_next/static/"),
        Header(HEADER_X_POWERED_BY, "next.js"),
        HeaderPresent("x-nextjs-cache"),
    ]),
    rule(Framework, "React", &[
        Selector("[data-reactroot]"),
        Html("react-dom"),
        Html("__next_data__"),
        Html("_reactlistening"),
    ]),
    rule(Framework, "Nuxt.js", &[
        Html("__nuxt"),
        Html("/_nuxt/"),
    ]),
    rule(Framework, "Vue.js", &[
        Html("data-v-"),
        Html("vue.min.js"),
        Html("vue.global"),
        Html("__nuxt"),
    ]),
    rule(Framework, "Angular", &[
        Selector("[ng-version]"),
        Html("ng-version="),
    ]),
    rule(Framework, "AngularJS", &[
        Selector("[ng-app]"),
        Html("angular.min.js"),
    ]),
    rule(Framework, "Svelte", &[
        Html("svelte-"),
        Html("__sveltekit"),
    ]),
    rule(Framework, "Remix", &[
        Html("__remixcontext"),
    ]),
    rule(Framework, "Ember.js", &[
        Html("ember-application"),
        Html("ember.min.js"),
    ]),
    rule(Framework, "Laravel", &[
        Header("set-cookie", "laravel_session"),
        Html("laravel"),
    ]),
    rule(Framework, "Django", &[
        Html("csrfmiddlewaretoken"),
        Header("set-cookie", "csrftoken"),
    ]),
    rule(Framework, "Ruby on Rails", &[
        Html("authenticity_token"),
        Header(HEADER_X_POWERED_BY, "phusion passenger"),
        HeaderPresent("x-runtime"),
    ]),
    rule(Framework, "Express", &[
        Header(HEADER_X_POWERED_BY, "express"),
    ]),
    rule(Framework, "ASP.NET", &[
        Header(HEADER_X_POWERED_BY, "asp.net"),
        HeaderPresent("x-aspnet-version"),
        Html("__viewstate"),
    ]),
    rule(Framework, "Symfony", &[
        HeaderPresent("x-debug-token"),
        Html("sf-toolbar"),
    ]),
    rule(Framework, "Yii", &[
        Html("yii.js"),
        Html("yiiactiveform"),
    ]),
    rule(Framework, "CodeIgniter", &[
        Header("set-cookie", "ci_session"),
    ]),
    rule(Framework, "Spring", &[
        Header("set-cookie", "jsessionid"),
        HeaderPresent("x-application-context"),
    ]),

    // Languages
    rule(Language, "PHP", &[
        Header(HEADER_X_POWERED_BY, "php"),
        Header("set-cookie", "phpsessid"),
        Html(".php"),
        Html("/wp-content/"),
        Html("/bitrix/"),
    ]),
    rule(Language, "JavaScript", &[
        Html("<script"),
    ]),
    rule(Language, "TypeScript", &[
        Html(".ts\""),
        Html("ng-version="),
    ]),
    rule(Language, "Node.js", &[
        Header(HEADER_X_POWERED_BY, "express"),
        Header(HEADER_X_POWERED_BY, "next.js"),
        Html("__next_data__"),
        Html("__nuxt"),
    ]),
    rule(Language, "Python", &[
        Html("csrfmiddlewaretoken"),
        Header(HEADER_SERVER, "gunicorn"),
        Header(HEADER_SERVER, "uvicorn"),
        Header(HEADER_SERVER, "python"),
    ]),
    rule(Language, "Ruby", &[
        Header(HEADER_X_POWERED_BY, "phusion passenger"),
        Header(HEADER_SERVER, "puma"),
        HeaderPresent("x-runtime"),
    ]),
    rule(Language, "C#", &[
        Header(HEADER_X_POWERED_BY, "asp.net"),
        HeaderPresent("x-aspnet-version"),
        Html(".aspx"),
    ]),
    rule(Language, "Java", &[
        Header("set-cookie", "jsessionid"),
        Html(".jsp"),
    ]),

    // Databases
    rule(Database, "MySQL", &[
        Html("/wp-content/"),
        Html("/components/com_"),
        Html("/sites/default/files/"),
        Html("/bitrix/"),
        Html("catalog/view/theme"),
        Html("mage/cookies"),
    ]),
    rule(Database, "Microsoft SQL Server", &[
        Html("__viewstate"),
        HeaderPresent("x-aspnet-version"),
    ]),
    rule(Database, "PostgreSQL", &[
        Html("csrfmiddlewaretoken"),
        Html("authenticity_token"),
    ]),
    rule(Database, "MongoDB", &[
        Html("mongodb"),
    ]),
    rule(Database, "Firebase", &[
        Html("firebaseio.com"),
        Html("firebaseapp.com"),
        Html("firebase-app.js"),
    ]),
    rule(Database, "Supabase", &[
        Html("supabase.co"),
    ]),

    // Cloud platforms, in priority order
    rule(CloudPlatform, "Vercel", &[
        HeaderPresent("x-vercel-id"),
        Header(HEADER_SERVER, "vercel"),
    ]),
    rule(CloudPlatform, "Netlify", &[
        HeaderPresent("x-nf-request-id"),
        Header(HEADER_SERVER, "netlify"),
    ]),
    rule(CloudPlatform, "GitHub Pages", &[
        Header(HEADER_SERVER, "github.com"),
        HeaderPresent("x-github-request-id"),
    ]),
    rule(CloudPlatform, "Heroku", &[
        Header(HEADER_VIA, "vegur"),
        Header(HEADER_SERVER, "heroku"),
    ]),
    rule(CloudPlatform, "Fly.io", &[
        HeaderPresent("fly-request-id"),
    ]),
    rule(CloudPlatform, "Render", &[
        HeaderPresent("rndr-id"),
        HeaderPresent("x-render-origin-server"),
    ]),
    rule(CloudPlatform, "Firebase Hosting", &[
        Html("firebaseapp.com"),
        Header(HEADER_X_SERVED_BY, "firebase"),
    ]),
    rule(CloudPlatform, "AWS", &[
        HeaderPresent("x-amz-cf-id"),
        HeaderPresent("x-amz-request-id"),
        Header(HEADER_SERVER, "amazons3"),
        Header(HEADER_SERVER, "awselb"),
    ]),
    rule(CloudPlatform, "Google Cloud", &[
        Header(HEADER_SERVER, "google frontend"),
        Header(HEADER_VIA, "google"),
        HeaderPresent("x-goog-generation"),
        HeaderPresent("x-cloud-trace-context"),
    ]),
    rule(CloudPlatform, "Microsoft Azure", &[
        HeaderPresent("x-azure-ref"),
        HeaderPresent("x-ms-request-id"),
    ]),

    // CSS frameworks
    rule(CssFramework, "Bootstrap", &[
        Html("bootstrap.min.css"),
        Html("bootstrap.css"),
        Html("bootstrap.bundle"),
        Html("bootstrap.min.js"),
    ]),
    rule(CssFramework, "Tailwind CSS", &[
        Html("tailwindcss"),
        Html("tailwind.min.css"),
        Html("cdn.tailwindcss.com"),
    ]),
    rule(CssFramework, "Bulma", &[
        Html("bulma.min.css"),
        Html("bulma.css"),
    ]),
    rule(CssFramework, "Foundation", &[
        Html("foundation.min.css"),
        Html("foundation.css"),
    ]),
    rule(CssFramework, "Materialize", &[
        Html("materialize.min.css"),
        Html("materialize.css"),
    ]),
    rule(CssFramework, "Semantic UI", &[
        Html("semantic.min.css"),
    ]),
    rule(CssFramework, "UIkit", &[
        Html("uikit.min.css"),
        Html("uk-navbar"),
    ]),
    rule(CssFramework, "Material UI", &[
        Html("muibutton-root"),
        Html("muipaper-root"),
    ]),
    rule(CssFramework, "Chakra UI", &[
        Html("chakra-"),
    ]),
    rule(CssFramework, "Ant Design", &[
        Html("ant-btn"),
        Html("antd.min.css"),
    ]),

    // Preprocessors
    rule(Preprocessor, "Sass", &[
        Html(".scss"),
        Html(".sass\""),
    ]),
    rule(Preprocessor, "Less", &[
        Html("stylesheet/less"),
        Html("less.min.js"),
    ]),
    rule(Preprocessor, "Stylus", &[
        Html(".styl\""),
    ]),
    rule(Preprocessor, "PostCSS", &[
        Html("postcss"),
    ]),

    // Static site generators
    rule(StaticGenerator, "Gatsby", &[
        Html("___gatsby"),
        Generator("gatsby"),
    ]),
    rule(StaticGenerator, "Hugo", &[
        Generator("hugo"),
    ]),
    rule(StaticGenerator, "Jekyll", &[
        Generator("jekyll"),
    ]),
    rule(StaticGenerator, "Hexo", &[
        Generator("hexo"),
    ]),
    rule(StaticGenerator, "Eleventy", &[
        Generator("eleventy"),
    ]),
    rule(StaticGenerator, "Astro", &[
        Generator("astro"),
        Html("astro-island"),
    ]),
    rule(StaticGenerator, "Docusaurus", &[
        Generator("docusaurus"),
    ]),
    rule(StaticGenerator, "VuePress", &[
        Generator("vuepress"),
    ]),
    rule(StaticGenerator, "MkDocs", &[
        Generator("mkdocs"),
    ]),

    // Build tools
    rule(BuildTool, "Webpack", &[
        Html("webpackjsonp"),
        Html("__webpack_require__"),
        Html("webpackchunk"),
    ]),
    rule(BuildTool, "Vite", &[
        Html("/@vite/client"),
        Html("vite-legacy"),
        Html("modulepreload"),
    ]),
    rule(BuildTool, "Parcel", &[
        Html("parcelrequire"),
    ]),
    rule(BuildTool, "Turbopack", &[
        Html("turbopack"),
    ]),

    // Micro-frameworks
    rule(MicroFramework, "Alpine.js", &[
        Html("alpinejs"),
        Html("x-data="),
    ]),
    rule(MicroFramework, "htmx", &[
        Html("htmx.org"),
        Html("hx-get="),
        Html("hx-post="),
    ]),
    rule(MicroFramework, "Stimulus", &[
        Html("data-controller="),
    ]),
    rule(MicroFramework, "Preact", &[
        Html("preact"),
    ]),
    rule(MicroFramework, "Lit", &[
        Html("lit-element"),
        Html("lit-html"),
    ]),
    rule(MicroFramework, "Petite Vue", &[
        Html("petite-vue"),
    ]),

    // E-commerce
    rule(Ecommerce, "WooCommerce", &[
        Html("woocommerce"),
        Html("wc-ajax"),
    ]),
    rule(Ecommerce, "Shopify", &[
        Html("cdn.shopify.com"),
        HeaderPresent("x-shopid"),
    ]),
    rule(Ecommerce, "Magento", &[
        Html("mage/cookies"),
        HeaderPresent("x-magento-cache-debug"),
    ]),
    rule(Ecommerce, "OpenCart", &[
        Html("index.php?route="),
    ]),
    rule(Ecommerce, "PrestaShop", &[
        Html("prestashop"),
    ]),
    rule(Ecommerce, "BigCommerce", &[
        Html("bigcommerce.com"),
    ]),
    rule(Ecommerce, "Ecwid", &[
        Html("ecwid"),
    ]),
    rule(Ecommerce, "Horoshop", &[
        Html("horoshop"),
    ]),
    rule(Ecommerce, "Prom.ua", &[
        Html("prom.ua"),
    ]),
    rule(Ecommerce, "Snipcart", &[
        Html("snipcart"),
    ]),

    // JavaScript libraries
    rule(JsLibrary, "jQuery", &[
        Html("jquery"),
    ]),
    rule(JsLibrary, "Lodash", &[
        Html("lodash"),
    ]),
    rule(JsLibrary, "Moment.js", &[
        Html("moment.min.js"),
        Html("moment.js"),
    ]),
    rule(JsLibrary, "GSAP", &[
        Html("gsap"),
    ]),
    rule(JsLibrary, "Swiper", &[
        Html("swiper"),
    ]),
    rule(JsLibrary, "Slick", &[
        Html("slick.min.js"),
        Html("slick-slider"),
    ]),
    rule(JsLibrary, "Owl Carousel", &[
        Html("owl.carousel"),
        Html("owl-carousel"),
    ]),
    rule(JsLibrary, "Three.js", &[
        Html("three.min.js"),
        Html("three.module.js"),
    ]),
    rule(JsLibrary, "Chart.js", &[
        Html("chart.min.js"),
        Html("chart.umd"),
    ]),
    rule(JsLibrary, "D3.js", &[
        Html("d3.min.js"),
        Html("d3.v7"),
    ]),
    rule(JsLibrary, "Axios", &[
        Html("axios"),
    ]),
    rule(JsLibrary, "AOS", &[
        Html("aos.js"),
        Html("data-aos="),
    ]),
    rule(JsLibrary, "Lottie", &[
        Html("lottie"),
    ]),
    rule(JsLibrary, "Modernizr", &[
        Html("modernizr"),
    ]),
];

pub const REFINEMENTS: &[Refinement] = &[Refinement {
    category: Cms,
    when: "WordPress",
    becomes: "WooCommerce (WordPress)",
    signals: &[
        Html("woocommerce"),
        Html("wc-ajax"),
        Selector("body.woocommerce"),
    ],
}];
