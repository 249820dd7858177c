use crate::i18n::Lang;

/// A piece of display text carried in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub pt: &'static str,
}

impl Localized {
    pub const fn same(text: &'static str) -> Self {
        Self { en: text, pt: text }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Pt => self.pt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InDevelopment,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub link: Option<&'static str>,
    /// Shows the "I want one like this" call to action in the detail overlay.
    pub offers_similar: bool,
    pub summary: Localized,
    pub details: Localized,
    pub tags: &'static [&'static str],
    pub status: ProjectStatus,
    pub category: Localized,
    /// Tailwind background class used for the card accent.
    pub accent: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub quote: Localized,
    pub project: Localized,
    pub stars: u8,
}

/// Average rating on the freelancing platform the testimonials come from.
pub const PLATFORM_RATING: f32 = 4.8;
pub const MAX_STARS: u8 = 5;

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn testimonials() -> &'static [Testimonial] {
    TESTIMONIALS
}

static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "VET ANESTHESIA PRO",
        link: Some("https://vetanesthesiapro.com/"),
        offers_similar: true,
        summary: Localized {
            en: "SaaS for veterinary clinics. Complete anesthesia management with high precision.",
            pt: "SaaS para clínicas veterinárias. Gestão completa de anestesias com alta precisão.",
        },
        details: Localized {
            en: "This project was developed to solve the complexity of calculating and monitoring anesthesia in veterinary procedures. The platform offers an intuitive interface for anesthetists to register vital signs in real time, calculate drug dosages based on pre-defined protocols and generate detailed reports.",
            pt: "Este projeto foi desenvolvido para resolver a complexidade do cálculo e monitoramento de anestesias em procedimentos veterinários. A plataforma oferece uma interface intuitiva para os anestesistas registrarem sinais vitais em tempo real, calcularem dosagens de fármacos com base em protocolos pré-definidos e gerarem relatórios detalhados.",
        },
        tags: &["React", "Supabase", "Vercel", "Tailwind"],
        status: ProjectStatus::Completed,
        category: Localized::same("SAAS"),
        accent: "bg-blue-500",
    },
    Project {
        id: 19,
        title: "FORUM VET ANESTHESIA",
        link: Some("https://forum.vetanesthesiapro.com/"),
        offers_similar: false,
        summary: Localized {
            en: "Forum dedicated to the veterinary community for discussing cases and protocols.",
            pt: "Fórum dedicado à comunidade veterinária para discussão de casos e protocolos.",
        },
        details: Localized {
            en: "Community platform for veterinarians to exchange experiences, discuss complex anesthesia cases and share protocols. Under constant development.",
            pt: "Plataforma de comunidade para veterinários trocarem experiências, discutirem casos complexos de anestesia e compartilharem protocolos. Em desenvolvimento constante.",
        },
        tags: &["Next.js", "Supabase", "Redis", "Postgres", "Google OAuth"],
        status: ProjectStatus::InDevelopment,
        category: Localized::same("COMMUNITY"),
        accent: "bg-blue-400",
    },
    Project {
        id: 2,
        title: "DELIBOT AI",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "WhatsApp Bot with AI for delivery automation and customer service.",
            pt: "Bot de WhatsApp com IA para automação de delivery e atendimento ao cliente.",
        },
        details: Localized {
            en: "Customer service automation solution for delivery via WhatsApp. Uses AI to understand orders, answer questions and finalize purchases autonomously. Integrated with Evolution API and Docker.",
            pt: "Solução de automação de atendimento para delivery via WhatsApp. Utiliza IA para entender pedidos, responder dúvidas e finalizar compras autonomamente. Integrado com Evolution API e Docker.",
        },
        tags: &["Astro", "Node.js", "Docker", "AI", "Evolution API"],
        status: ProjectStatus::Completed,
        category: Localized::same("BOT/AI"),
        accent: "bg-yellow-500",
    },
    Project {
        id: 3,
        title: "CARRO DIGITAL",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "Ecosystem with Virtual Store and real-time vehicle consultations.",
            pt: "Ecossistema com Loja Virtual e consultas veiculares em tempo real.",
        },
        details: Localized {
            en: "Ecosystem that unites auto parts virtual store with vehicle consultation service. React Native app for native experience and Vue.js web version. Robust Node.js backend.",
            pt: "Ecossistema que une loja virtual de autopeças a serviço de consulta veicular. App em React Native para experiência nativa e versão web em Vue.js. Backend robusto em Node.js.",
        },
        tags: &["React Native", "Vue", "Node.js", "MySQL"],
        status: ProjectStatus::Completed,
        category: Localized::same("MOBILE/WEB"),
        accent: "bg-purple-500",
    },
    Project {
        id: 4,
        title: "GESTÃO LAVANDERIAS",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "Operational platform for laundries with financial flow control.",
            pt: "Plataforma operacional para lavanderias com controle de fluxo financeiro.",
        },
        details: Localized {
            en: "Complete management system for laundries, optimizing flow from reception to delivery. Inventory, customer and invoice control. Detailed financial dashboard.",
            pt: "Sistema de gestão completo para lavanderias, otimizando o fluxo desde a recepção até a entrega. Controle de estoque, clientes e notas fiscais. Dashboard financeiro detalhado.",
        },
        tags: &["React", "Postgres", "Node.js", "Vite", "WhatsApp Cloud API"],
        status: ProjectStatus::Completed,
        category: Localized {
            en: "SYSTEM",
            pt: "SISTEMA",
        },
        accent: "bg-emerald-500",
    },
    Project {
        id: 5,
        title: "BRICOIN",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "Complete investment system integrated with payment gateway.",
            pt: "Sistema completo de investimento integrado com gateway de pagamento.",
        },
        details: Localized {
            en: "Secure and scalable investment platform, with complete payment integration via Mercado Pago. Developed for high financial performance.",
            pt: "Plataforma de investimentos segura e escalável, com integração completa de pagamentos via Mercado Pago. Desenvolvida para alta performance financeira.",
        },
        tags: &["Node.js", "Vue", "Mercado Pago", "MySQL"],
        status: ProjectStatus::Completed,
        category: Localized::same("FINTECH"),
        accent: "bg-indigo-500",
    },
    Project {
        id: 6,
        title: "VIAPET.SHOP",
        link: Some("https://viapet.shop/"),
        offers_similar: false,
        summary: Localized {
            en: "Marketplace for selling pet products and services.",
            pt: "Marketplace para venda de produtos e serviços para pets.",
        },
        details: Localized {
            en: "Multivendor platform for the pet niche, allowing various shopkeepers to sell products and services. Integration with Mercado Pago for payments.",
            pt: "Plataforma multivendor para o nicho pet, permitindo que diversos lojistas vendam produtos e serviços. Integração com Mercado Pago para pagamentos.",
        },
        tags: &["Vue", "Node.js", "Mercado Pago", "MySQL"],
        status: ProjectStatus::Completed,
        category: Localized::same("MARKETPLACE"),
        accent: "bg-orange-500",
    },
    Project {
        id: 7,
        title: "ACHEICASA.NET",
        link: Some("https://acheicasa.net/"),
        offers_similar: false,
        summary: Localized {
            en: "Real estate search and advertisement portal.",
            pt: "Portal de busca e anúncios de imóveis.",
        },
        details: Localized {
            en: "Complete real estate portal with advanced search filters, interactive maps and Mercado Pago integration for ad highlighting.",
            pt: "Portal imobiliário completo com filtros avançados de busca, mapas interativos e integração com Mercado Pago para destaque de anúncios.",
        },
        tags: &[
            "Nuxt SSR",
            "Node.js",
            "Mercado Pago",
            "Postgres",
            "Docker",
            "Easypanel",
        ],
        status: ProjectStatus::Completed,
        category: Localized::same("REAL ESTATE"),
        accent: "bg-cyan-500",
    },
    Project {
        id: 8,
        title: "GYMSOFTWARE",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "Gym management integrated with access control (turnstile).",
            pt: "Gestão de academias integrado com controle de acesso (catraca).",
        },
        details: Localized {
            en: "Management system for gyms that controls plans, payments and automatically releases access on the physical turnstile.",
            pt: "Sistema de gerenciamento para academias que controla planos, pagamentos e libera automaticamente o acesso na catraca física.",
        },
        tags: &["Vue", "C#", "Firebase"],
        status: ProjectStatus::Completed,
        category: Localized {
            en: "SYSTEM",
            pt: "SISTEMA",
        },
        accent: "bg-red-500",
    },
    Project {
        id: 9,
        title: "BOTYT",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "Bot for automatic publication with interface and multiple channels.",
            pt: "Bot para publicação automática com interface e múltiplos canais.",
        },
        details: Localized {
            en: "Automation tool for content creators, allowing scheduling and automatic publication on multiple channels simultaneously.",
            pt: "Ferramenta de automação para criadores de conteúdo, permitindo agendamento e publicação automática em múltiplos canais simultaneamente.",
        },
        tags: &["Vue", "Node.js", "MySQL"],
        status: ProjectStatus::Completed,
        category: Localized::same("AUTOMATION"),
        accent: "bg-pink-500",
    },
    Project {
        id: 10,
        title: "COPLANNER",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "Multiplatform sales and stock control.",
            pt: "Controle de vendas e estoque multiplataforma.",
        },
        details: Localized {
            en: "Application for rigorous sales and inventory control, developed to be fast and accessible on any device.",
            pt: "Aplicação para controle rigoroso de vendas e inventário, desenvolvida para ser rápida e acessível em qualquer dispositivo.",
        },
        tags: &["FlutterFlow", "Supabase", "MySQL"],
        status: ProjectStatus::Completed,
        category: Localized::same("MOBILE/WEB"),
        accent: "bg-teal-500",
    },
    Project {
        id: 11,
        title: "BLOG CIENCIAETECH",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "Science and technology blog with custom CMS.",
            pt: "Blog de ciências e tecnologia com CMS próprio.",
        },
        details: Localized {
            en: "Content platform focused on science and technology, with a custom content manager (CMS) for editors.",
            pt: "Plataforma de conteúdo focada em ciência e tecnologia, com um gerenciador de conteúdo (CMS) customizado para os editores.",
        },
        tags: &["Node.js", "Vue.js", "MySQL"],
        status: ProjectStatus::Completed,
        category: Localized::same("CONTENT"),
        accent: "bg-gray-500",
    },
    Project {
        id: 12,
        title: "ALERTAS FUTEBOL",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "Backend for real-time soccer match alerts.",
            pt: "Backend para alertas em tempo real de partidas de futebol.",
        },
        details: Localized {
            en: "High-performance backend service that monitors soccer matches and sends push notifications in real time via Redis.",
            pt: "Serviço de backend de alta performance que monitora partidas de futebol e envia notificações push em tempo real via Redis.",
        },
        tags: &["Node.js", "Redis", "PostgreSQL"],
        status: ProjectStatus::Completed,
        category: Localized::same("BACKEND"),
        accent: "bg-green-600",
    },
    Project {
        id: 13,
        title: "ALUGMOTOS (LP)",
        link: Some("https://alugmotos.com.br/"),
        offers_similar: false,
        summary: Localized {
            en: "Dynamic landing page for motorcycle rental.",
            pt: "Landing page dinâmica para locação de motos.",
        },
        details: Localized {
            en: "Conversion page with dynamic data based on location and rental unit configuration.",
            pt: "Página de conversão com dados dinâmicos baseados na localização e configuração das unidades de locação.",
        },
        tags: &["Next.js", "Node.js", "Postgres", "Redis"],
        status: ProjectStatus::Completed,
        category: Localized::same("WEB"),
        accent: "bg-yellow-600",
    },
    Project {
        id: 14,
        title: "APP ALUGMOTOS",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "App for renter, admin and surveyor.",
            pt: "App para locatário, admin e vistoriador.",
        },
        details: Localized {
            en: "Complex application for complete motorcycle fleet management, including inspections, recurring payments and maintenance.",
            pt: "Aplicativo complexo para gestão completa de frota de motos, incluindo vistorias, pagamentos recorrentes e manutenção.",
        },
        tags: &["Next.js", "Node.js", "Docker"],
        status: ProjectStatus::Completed,
        category: Localized {
            en: "APP/SYSTEM",
            pt: "APP/SISTEMA",
        },
        accent: "bg-blue-600",
    },
    Project {
        id: 15,
        title: "CARDAPIU",
        link: Some("https://cardapiu.shop/"),
        offers_similar: true,
        summary: Localized {
            en: "Delivery system for establishments.",
            pt: "Sistema de delivery para estabelecimentos.",
        },
        details: Localized {
            en: "iFood-style delivery platform for restaurants, with Desktop administrative panel in .NET.",
            pt: "Plataforma de delivery estilo iFood para restaurantes, com painel administrativo Desktop em .NET.",
        },
        tags: &["Next.js", "Node.js", "Postgres", ".NET"],
        status: ProjectStatus::Completed,
        category: Localized::same("DELIVERY"),
        accent: "bg-orange-600",
    },
    Project {
        id: 16,
        title: "ENTREGU",
        link: Some("https://www.entregu.com.br/"),
        offers_similar: false,
        summary: Localized {
            en: "System for couriers and shopkeepers.",
            pt: "Sistema para entregadores e lojistas.",
        },
        details: Localized {
            en: "Last-mile logistics platform connecting couriers to local shopkeepers, with real-time tracking.",
            pt: "Plataforma de logística last-mile conectando entregadores a lojistas locais, com rastreamento em tempo real.",
        },
        tags: &["React", "Next.js", "React Native", "Node.js", "Postgres", "Redis"],
        status: ProjectStatus::Completed,
        category: Localized {
            en: "LOGISTICS",
            pt: "LOGÍSTICA",
        },
        accent: "bg-red-600",
    },
    Project {
        id: 17,
        title: "MARKETING CAMPAIGNS",
        link: None,
        offers_similar: false,
        summary: Localized {
            en: "Platform for multichannel campaign automation.",
            pt: "Plataforma para automação de campanhas multicanal.",
        },
        details: Localized {
            en: "Robust tool for creating and triggering marketing campaigns via WhatsApp, Email and SMS.",
            pt: "Ferramenta robusta para criação e disparo de campanhas de marketing via WhatsApp, E-mail e SMS.",
        },
        tags: &["Node.js", "Next.js", "Redis"],
        status: ProjectStatus::Completed,
        category: Localized::same("MARKETING"),
        accent: "bg-purple-600",
    },
    Project {
        id: 18,
        title: "LORYS MODA CRISTA",
        link: Some("https://lorysmodacrista.com.br/"),
        offers_similar: true,
        summary: Localized {
            en: "Complete Christian fashion e-commerce.",
            pt: "E-commerce de moda cristã completo.",
        },
        details: Localized {
            en: "Complete virtual store with order management system, integration with Melhor Envio for shipping and Mercado Pago for payments. Intuitive administrative panel.",
            pt: "Loja virtual completa com sistema de gestão de pedidos, integração com Melhor Envio para fretes e Mercado Pago para pagamentos. Painel administrativo intuitivo.",
        },
        tags: &[
            "React",
            "Next.js",
            "Supabase",
            "Melhor Envio",
            "Mercado Pago",
            "shadcn",
        ],
        status: ProjectStatus::Completed,
        category: Localized::same("E-COMMERCE"),
        accent: "bg-pink-600",
    },
];

static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        quote: Localized {
            en: "Excellent professional!!! Incredible knowledge and mastery. Punctual, dedicated, understands the project and executes with agility.",
            pt: "Excelente profissional!!! Conhecimento e domínio incrível. Pontual, dedicado, compreende o projeto e executa com agilidade.",
        },
        project: Localized {
            en: "Real Estate Portal",
            pt: "Portal Imobiliário",
        },
        stars: 5,
    },
    Testimonial {
        id: 2,
        quote: Localized {
            en: "Excellent programmer! Delivered before the deadline, very committed and has great communication.",
            pt: "Excelente programador! Entregou antes do prazo final, muito comprometido e tem ótima comunicação.",
        },
        project: Localized {
            en: "Veterinary App",
            pt: "App Veterinário",
        },
        stars: 5,
    },
    Testimonial {
        id: 3,
        quote: Localized {
            en: "Recommend. Helpful and everything according to the agreement.",
            pt: "Recomendo. Prestativo e tudo de acordo com o combinado.",
        },
        project: Localized {
            en: "WebSocket App",
            pt: "App WebSocket",
        },
        stars: 5,
    },
    Testimonial {
        id: 4,
        quote: Localized {
            en: "Very helpful and competent professional.",
            pt: "Profissional muito prestativo e competente.",
        },
        project: Localized {
            en: "Management System",
            pt: "Sistema de Gestão",
        },
        stars: 5,
    },
    Testimonial {
        id: 5,
        quote: Localized {
            en: "Super helpful. Understood exactly what I needed.",
            pt: "Super prestativo. Entendeu exatamente o que eu precisava.",
        },
        project: Localized {
            en: "Website and Mobile App",
            pt: "Site e App Mobile",
        },
        stars: 5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_localized(text: &Localized, what: &str) {
        for lang in Lang::ALL {
            assert!(!text.get(lang).is_empty(), "{what} missing {lang:?}");
        }
    }

    #[test]
    fn test_project_ids_unique() {
        let ids = projects().iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_project_records_complete() {
        for p in projects() {
            assert!(!p.title.is_empty());
            assert!(!p.tags.is_empty(), "{} has no tags", p.title);
            assert!(p.accent.starts_with("bg-"));
            assert_localized(&p.summary, p.title);
            assert_localized(&p.details, p.title);
            assert_localized(&p.category, p.title);
            if let Some(link) = p.link {
                assert!(link.starts_with("https://"), "{link}");
            }
        }
    }

    #[test]
    fn test_offers_similar_has_link() {
        let offering = projects()
            .iter()
            .filter(|p| p.offers_similar)
            .collect::<Vec<_>>();
        assert!(!offering.is_empty());
        assert!(offering.iter().all(|p| p.link.is_some()));
    }

    #[test]
    fn test_project_lookup() {
        let p = project(15).expect("project 15 exists");
        assert_eq!(p.title, "CARDAPIU");
        assert!(std::ptr::eq(p, &projects()[15]));
        assert!(project(999).is_none());
    }

    #[test]
    fn test_testimonials() {
        let ids = testimonials()
            .iter()
            .map(|t| t.id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), testimonials().len());
        for t in testimonials() {
            assert!((1..=MAX_STARS).contains(&t.stars));
            assert_localized(&t.quote, "quote");
            assert_localized(&t.project, "project");
        }
        assert!(PLATFORM_RATING <= MAX_STARS as f32);
    }

    #[test]
    fn test_localized_get() {
        let text = Localized {
            en: "SYSTEM",
            pt: "SISTEMA",
        };
        assert_eq!(text.get(Lang::En), "SYSTEM");
        assert_eq!(text.get(Lang::Pt), "SISTEMA");
        assert_eq!(Localized::same("WEB").get(Lang::Pt), "WEB");
    }
}
