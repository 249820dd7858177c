use serde::Serialize;

/// Languages the page can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Pt,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Pt];

    /// Value for the `<html lang>` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt-BR",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::Pt,
            Lang::Pt => Lang::En,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Translations {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub stack: StackStrings,
    pub projects: ProjectStrings,
    pub testimonials: TestimonialStrings,
    pub contact: ContactStrings,
    pub footer: FooterStrings,
    pub meta: MetaStrings,
}

#[derive(Debug, Serialize)]
pub struct NavStrings {
    pub home: &'static str,
    pub stack: &'static str,
    pub projects: &'static str,
    pub testimonials: &'static str,
    pub contact: &'static str,
    pub switch_language: &'static str,
    pub open_menu: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HeroStrings {
    pub available: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub view_portfolio: &'static str,
    pub quote: &'static str,
    pub download_cv: &'static str,
    pub system_active: &'static str,
    pub clients: &'static str,
    pub satisfied: &'static str,
    pub rating: &'static str,
    pub deliveries: &'static str,
    pub on_time: &'static str,
    pub github_activity: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StackStrings {
    pub title_prefix: &'static str,
    pub title_suffix: &'static str,
    pub fullstack: &'static str,
    pub frontend: &'static str,
    pub backend: &'static str,
    pub devops: &'static str,
    pub devops_desc: &'static str,
    pub response_time: &'static str,
    pub time_unit: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProjectStrings {
    pub label: &'static str,
    pub title: &'static str,
    pub view_github: &'static str,
    pub view_details: &'static str,
    pub status_completed: &'static str,
    pub status_dev: &'static str,
    pub about: &'static str,
    pub tech: &'static str,
    pub close: &'static str,
    pub visit: &'static str,
    pub want_one: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TestimonialStrings {
    pub title_prefix: &'static str,
    pub title_suffix: &'static str,
    pub subtitle: &'static str,
    pub view_profile: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ContactStrings {
    pub title1: &'static str,
    pub title2: &'static str,
    pub subtitle: &'static str,
    pub start_transmission: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub msg_label: &'static str,
    pub sending: &'static str,
    pub send: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub conn_error: &'static str,
    pub fill_fields: &'static str,
    pub placeholder_name: &'static str,
    pub placeholder_email: &'static str,
    pub placeholder_msg: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FooterStrings {
    pub text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MetaStrings {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn translations(lang: Lang) -> &'static Translations {
    match lang {
        Lang::En => &EN,
        Lang::Pt => &PT,
    }
}

static EN: Translations = Translations {
    nav: NavStrings {
        home: "Home",
        stack: "Stack",
        projects: "Projects",
        testimonials: "Testimonials",
        contact: "Contact",
        switch_language: "PT",
        open_menu: "Open menu",
    },
    hero: HeroStrings {
        available: "AVAILABLE FOR PROJECTS",
        role: "FULLSTACK DEV",
        description: "Specialist in React, Vue and Node.js. I create custom, scalable and high-performance web systems and apps.",
        view_portfolio: "VIEW PORTFOLIO",
        quote: "GET A QUOTE",
        download_cv: "DOWNLOAD CV",
        system_active: "SYSTEM: ACTIVE",
        clients: "CLIENTS",
        satisfied: "15+ SATISFIED",
        rating: "RATING",
        deliveries: "DELIVERIES",
        on_time: "100% ON TIME",
        github_activity: "GITHUB ACTIVITY",
    },
    stack: StackStrings {
        title_prefix: "TECH_",
        title_suffix: "ARSENAL",
        fullstack: "FULLSTACK",
        frontend: "Frontend & Mobile",
        backend: "Backend & DB",
        devops: "DevOps",
        devops_desc: "Docker, Vercel & Payment Gateways.",
        response_time: "Response Time",
        time_unit: "24h",
    },
    projects: ProjectStrings {
        label: "// FULL PORTFOLIO",
        title: "PROJECTS",
        view_github: "View GitHub",
        view_details: "View Details",
        status_completed: "COMPLETED",
        status_dev: "IN DEVELOPMENT",
        about: "// ABOUT THE PROJECT",
        tech: "// TECHNOLOGIES",
        close: "CLOSE",
        visit: "VISIT PROJECT",
        want_one: "I WANT ONE LIKE THIS",
    },
    testimonials: TestimonialStrings {
        title_prefix: "REAL",
        title_suffix: "FEEDBACK",
        subtitle: "Average based on client reviews on 99Freelas.",
        view_profile: "VIEW FULL PROFILE",
    },
    contact: ContactStrings {
        title1: "LET'S CREATE",
        title2: "THE NEXT LEVEL?",
        subtitle: "Get in touch to discuss your next project. I reply within 24h.",
        start_transmission: "START TRANSMISSION",
        name_label: "IDENTITY // NAME",
        email_label: "FREQUENCY // EMAIL",
        msg_label: "PAYLOAD // MESSAGE",
        sending: "SENDING DATA...",
        send: "SEND MESSAGE",
        success: "Message sent successfully! I will contact you soon.",
        error: "Error sending message. Please try again later.",
        conn_error: "Connection error. Check your internet.",
        fill_fields: "Please fill in all fields.",
        placeholder_name: "John Doe",
        placeholder_email: "john@example.com",
        placeholder_msg: "Describe your mission...",
    },
    footer: FooterStrings {
        text: "Developed with hate and caffeine.",
    },
    meta: MetaStrings {
        title: "João Vitor | Fullstack Developer React, Vue and Node.js",
        description: "Freelance Fullstack Developer specialized in React, Vue, Node.js and AI automation. I create scalable web systems and high-performance apps.",
    },
};

static PT: Translations = Translations {
    nav: NavStrings {
        home: "Home",
        stack: "Stack",
        projects: "Projetos",
        testimonials: "Depoimentos",
        contact: "Contato",
        switch_language: "EN",
        open_menu: "Abrir menu",
    },
    hero: HeroStrings {
        available: "DISPONÍVEL PARA PROJETOS",
        role: "FULLSTACK DEV",
        description: "Especialista em React, Vue e Node.js. Crio sistemas web e apps sob medida, escaláveis e de alta performance.",
        view_portfolio: "VER PORTFÓLIO",
        quote: "ORÇAMENTO",
        download_cv: "BAIXAR CV",
        system_active: "SYSTEM: ACTIVE",
        clients: "CLIENTES",
        satisfied: "15+ SATISFEITOS",
        rating: "RATING",
        deliveries: "ENTREGAS",
        on_time: "100% NO PRAZO",
        github_activity: "ATIVIDADE GITHUB",
    },
    stack: StackStrings {
        title_prefix: "TECH_",
        title_suffix: "ARSENAL",
        fullstack: "FULLSTACK",
        frontend: "Frontend & Mobile",
        backend: "Backend & DB",
        devops: "DevOps",
        devops_desc: "Docker, Vercel & Gateways de Pagamento.",
        response_time: "Tempo de Resposta",
        time_unit: "24h",
    },
    projects: ProjectStrings {
        label: "// PORTFÓLIO COMPLETO",
        title: "PROJETOS",
        view_github: "Ver GitHub",
        view_details: "Ver Detalhes",
        status_completed: "CONCLUÍDO",
        status_dev: "EM DESENVOLVIMENTO",
        about: "// SOBRE O PROJETO",
        tech: "// TECNOLOGIAS",
        close: "FECHAR",
        visit: "VISITAR PROJETO",
        want_one: "QUERO UM IGUAL",
    },
    testimonials: TestimonialStrings {
        title_prefix: "FEEDBACKS",
        title_suffix: "REAIS",
        subtitle: "Média baseada em avaliações de clientes no 99Freelas.",
        view_profile: "VER PERFIL COMPLETO",
    },
    contact: ContactStrings {
        title1: "VAMOS CRIAR",
        title2: "O PRÓXIMO NÍVEL?",
        subtitle: "Entre em contato para conversarmos sobre seu próximo projeto. Respondo em até 24h.",
        start_transmission: "INICIAR TRANSMISSÃO",
        name_label: "IDENTIDADE // NOME",
        email_label: "FREQUÊNCIA // EMAIL",
        msg_label: "PAYLOAD // MENSAGEM",
        sending: "ENVIANDO DADOS...",
        send: "ENVIAR MENSAGEM",
        success: "Mensagem enviada com sucesso! Entrarei em contato em breve.",
        error: "Erro ao enviar mensagem. Tente novamente mais tarde.",
        conn_error: "Erro de conexão. Verifique sua internet.",
        fill_fields: "Por favor, preencha todos os campos.",
        placeholder_name: "João Silva",
        placeholder_email: "joao@exemplo.com",
        placeholder_msg: "Descreva sua missão...",
    },
    footer: FooterStrings {
        text: "Desenvolvido com ódio e cafeína.",
    },
    meta: MetaStrings {
        title: "João Vitor | Desenvolvedor Fullstack React, Vue e Node.js",
        description: "Desenvolvedor Fullstack freelancer especializado em React, Vue, Node.js e automações com IA. Crio sistemas web escaláveis e apps de alta performance.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn collect_leaves(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    collect_leaves(&path, v, out);
                }
            }
            Value::String(s) => out.push((prefix.to_string(), s.clone())),
            other => panic!("unexpected value at {prefix}: {other:?}"),
        }
    }

    fn leaves(lang: Lang) -> Vec<(String, String)> {
        let value = serde_json::to_value(translations(lang)).expect("translations serialize");
        let mut out = Vec::new();
        collect_leaves("", &value, &mut out);
        out
    }

    #[test]
    fn test_every_key_translated() {
        for lang in Lang::ALL {
            for (key, text) in leaves(lang) {
                assert!(!text.trim().is_empty(), "{} is empty for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn test_languages_share_key_set() {
        let en = leaves(Lang::En)
            .into_iter()
            .map(|(k, _)| k)
            .collect::<Vec<_>>();
        let pt = leaves(Lang::Pt)
            .into_iter()
            .map(|(k, _)| k)
            .collect::<Vec<_>>();
        assert_eq!(en, pt);
    }

    #[test]
    fn test_toggle_round_trip() {
        for lang in Lang::ALL {
            assert_ne!(lang.toggle(), lang);
            assert_eq!(lang.toggle().toggle(), lang);
        }
    }

    #[test]
    fn test_html_lang() {
        assert_eq!(Lang::default(), Lang::En);
        assert_eq!(Lang::En.html_lang(), "en");
        assert_eq!(Lang::Pt.html_lang(), "pt-BR");
    }

    #[test]
    fn test_contact_messages_distinct() {
        for lang in Lang::ALL {
            let c = &translations(lang).contact;
            assert_ne!(c.error, c.conn_error);
            assert_ne!(c.error, c.fill_fields);
            assert_ne!(c.success, c.error);
        }
    }
}
