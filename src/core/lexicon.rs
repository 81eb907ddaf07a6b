//! Lexicon store: per-language crisis terms and response templates
//!
//! Populated once at process start, immutable afterwards, and passed by
//! reference into the scorer and selector. Unknown language codes fall
//! back to the default ("en") lexicon silently: a missing locale must
//! never surface as an error to someone mid-conversation, so the
//! fallback is documented behavior rather than a failure path.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::types::{
    CrisisCategory, FollowUpTemplate, Lexicon, ResponseTemplates, Sentiment, Severity,
    TierTemplate,
};
use crate::DEFAULT_LANGUAGE;

lazy_static! {
    static ref GLOBAL: LexiconStore = LexiconStore::builtin();
}

/// Immutable per-language lexicon map
#[derive(Debug)]
pub struct LexiconStore {
    languages: HashMap<&'static str, Lexicon>,
}

impl LexiconStore {
    /// Build a store holding every bundled language
    pub fn builtin() -> Self {
        let mut languages = HashMap::new();
        for lexicon in BUNDLED {
            languages.insert(lexicon.code, *lexicon);
        }
        Self { languages }
    }

    /// Process-wide store instance, built on first use
    pub fn global() -> &'static LexiconStore {
        &GLOBAL
    }

    /// Look up a language, falling back to the default lexicon for
    /// unknown codes. Total: never fails, never panics for any input.
    pub fn get(&self, code: &str) -> &Lexicon {
        self.languages
            .get(code)
            .unwrap_or_else(|| &self.languages[DEFAULT_LANGUAGE])
    }

    /// Whether a language has its own lexicon (no fallback involved)
    pub fn supports(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// Codes of every bundled language
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.languages.keys().copied()
    }

    /// Number of bundled languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

// =============================================================================
// BUNDLED LANGUAGES
// =============================================================================
// Templates for twelve languages. The default language carries no
// localized crisis terms: its terms are the language-independent table
// in the scorer.

static BUNDLED: &[Lexicon] = &[EN, ES, FR, DE, IT, PT, ZH, JA, KO, AR, HI, RU];

const EN: Lexicon = Lexicon {
    code: "en",
    crisis_terms: &[],
    templates: ResponseTemplates {
        welcome: "Hi! I'm your MindBuddy AI assistant. I'm here to provide immediate support and help assess how you're feeling. How are you doing today?",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "Thank you for sharing that. On a scale of 1-9, how would you rate your current mood?",
                keywords: &["ok", "fine", "good", "well"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "I understand this is challenging. Have you been experiencing these feelings for more than two weeks?",
                keywords: &["stressed", "anxious", "worried", "tired", "overwhelmed"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "I'm concerned about what you've shared. It's important that you talk to someone right away. Would you like me to connect you with immediate support?",
                keywords: &["sad", "depressed", "hopeless", "alone", "hurt", "pain"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "That's great to hear! What's been helping you feel this way?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "I understand. Can you tell me more about what's been on your mind?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "It sounds like you're going through a difficult time. You're not alone in this.",
            },
        ],
        offline: "You're currently offline. Your messages will be saved and processed when you reconnect.",
        disclaimer: "AI support for immediate help. Not a substitute for professional care.",
        crisis: "If you're having thoughts of self-harm, please contact emergency services immediately or call a crisis helpline.",
    },
};

const ES: Lexicon = Lexicon {
    code: "es",
    crisis_terms: &[
        (
            CrisisCategory::Suicide,
            &["suicidio", "matarme", "morir", "no quiero vivir"],
        ),
        (CrisisCategory::Despair, &["sin esperanza", "acabar con todo"]),
    ],
    templates: ResponseTemplates {
        welcome: "¡Hola! Soy tu asistente de IA MindBuddy. Estoy aquí para brindarte apoyo inmediato y ayudarte a evaluar cómo te sientes. ¿Cómo estás hoy?",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "Gracias por compartir eso. En una escala del 1 al 9, ¿cómo calificarías tu estado de ánimo actual?",
                keywords: &["bien", "bueno", "normal", "tranquilo"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "Entiendo que esto es desafiante. ¿Has estado experimentando estos sentimientos durante más de dos semanas?",
                keywords: &["estresado", "ansioso", "preocupado", "cansado", "abrumado"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "Me preocupa lo que has compartido. Es importante que hables con alguien de inmediato. ¿Te gustaría que te conecte con apoyo inmediato?",
                keywords: &["triste", "deprimido", "desesperanzado", "solo", "dolor"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "¡Qué bueno escuchar eso! ¿Qué te ha estado ayudando a sentirte así?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "Entiendo. ¿Puedes contarme más sobre lo que ha estado en tu mente?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "Parece que estás pasando por un momento difícil. No estás solo en esto.",
            },
        ],
        offline: "Actualmente estás sin conexión. Tus mensajes se guardarán y procesarán cuando te reconectes.",
        disclaimer: "Apoyo de IA para ayuda inmediata. No es sustituto de atención profesional.",
        crisis: "Si tienes pensamientos de autolesión, contacta servicios de emergencia inmediatamente o llama a una línea de crisis.",
    },
};

const FR: Lexicon = Lexicon {
    code: "fr",
    crisis_terms: &[
        (CrisisCategory::Suicide, &["suicide", "mourir", "en finir"]),
        (CrisisCategory::Despair, &["désespéré", "plus d'espoir"]),
    ],
    templates: ResponseTemplates {
        welcome: "Salut ! Je suis votre assistant IA MindBuddy. Je suis là pour vous apporter un soutien immédiat et vous aider à évaluer comment vous vous sentez. Comment allez-vous aujourd'hui ?",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "Merci de partager cela. Sur une échelle de 1 à 9, comment évalueriez-vous votre humeur actuelle ?",
                keywords: &["bien", "bon", "normal", "calme"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "Je comprends que c'est difficile. Ressentez-vous ces sentiments depuis plus de deux semaines ?",
                keywords: &["stressé", "anxieux", "inquiet", "fatigué", "débordé"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "Ce que vous avez partagé m'inquiète. Il est important que vous parliez à quelqu'un tout de suite. Souhaiteriez-vous que je vous connecte à un soutien immédiat ?",
                keywords: &["triste", "déprimé", "désespéré", "seul", "douleur"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "C'est formidable d'entendre cela ! Qu'est-ce qui vous aide à vous sentir ainsi ?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "Je comprends. Pouvez-vous me dire plus sur ce qui vous préoccupe ?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "Il semble que vous traversez une période difficile. Vous n'êtes pas seul dans cette épreuve.",
            },
        ],
        offline: "Vous êtes actuellement hors ligne. Vos messages seront sauvegardés et traités lors de votre reconnexion.",
        disclaimer: "Support IA pour aide immédiate. Ne remplace pas les soins professionnels.",
        crisis: "Si vous avez des pensées d'automutilation, contactez immédiatement les services d'urgence ou appelez une ligne de crise.",
    },
};

const DE: Lexicon = Lexicon {
    code: "de",
    crisis_terms: &[
        (
            CrisisCategory::Suicide,
            &["selbstmord", "töten", "sterben", "ende machen"],
        ),
        (CrisisCategory::Despair, &["hoffnungslos"]),
    ],
    templates: ResponseTemplates {
        welcome: "Hallo! Ich bin dein MindBuddy KI-Assistent. Ich bin hier, um dir sofortige Unterstützung zu bieten und dir zu helfen, zu bewerten, wie du dich fühlst. Wie geht es dir heute?",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "Danke, dass du das geteilt hast. Auf einer Skala von 1-9, wie würdest du deine aktuelle Stimmung bewerten?",
                keywords: &["gut", "okay", "normal", "ruhig"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "Ich verstehe, dass das herausfordernd ist. Erlebst du diese Gefühle schon seit mehr als zwei Wochen?",
                keywords: &["gestresst", "ängstlich", "besorgt", "müde", "überfordert"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "Was du geteilt hast, bereitet mir Sorgen. Es ist wichtig, dass du sofort mit jemandem sprichst. Möchtest du, dass ich dich mit sofortiger Hilfe verbinde?",
                keywords: &["traurig", "deprimiert", "hoffnungslos", "allein", "schmerz"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "Das ist großartig zu hören! Was hat dir geholfen, dich so zu fühlen?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "Ich verstehe. Kannst du mir mehr darüber erzählen, was dich beschäftigt?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "Es klingt, als würdest du eine schwere Zeit durchmachen. Du bist nicht allein damit.",
            },
        ],
        offline: "Du bist derzeit offline. Deine Nachrichten werden gespeichert und verarbeitet, wenn du dich wieder verbindest.",
        disclaimer: "KI-Unterstützung für sofortige Hilfe. Kein Ersatz für professionelle Betreuung.",
        crisis: "Wenn du Gedanken an Selbstverletzung hast, kontaktiere sofort den Notdienst oder rufe eine Krisenhotline an.",
    },
};

const IT: Lexicon = Lexicon {
    code: "it",
    crisis_terms: &[
        (
            CrisisCategory::Suicide,
            &["suicidio", "uccidermi", "morire", "finirla"],
        ),
        (CrisisCategory::Despair, &["disperato"]),
    ],
    templates: ResponseTemplates {
        welcome: "Ciao! Sono il tuo assistente AI MindBuddy. Sono qui per fornire supporto immediato e aiutarti a valutare come ti senti. Come stai oggi?",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "Grazie per aver condiviso questo. Su una scala da 1 a 9, come valuteresti il tuo umore attuale?",
                keywords: &["bene", "okay", "normale", "tranquillo"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "Capisco che sia difficile. Provi questi sentimenti da più di due settimane?",
                keywords: &["stressato", "ansioso", "preoccupato", "stanco", "sopraffatto"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "Quello che hai condiviso mi preoccupa. È importante che tu parli con qualcuno subito. Vorresti che ti collegassi con supporto immediato?",
                keywords: &["triste", "depresso", "senza speranza", "solo", "dolore"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "È fantastico sentire questo! Cosa ti ha aiutato a sentirti così?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "Capisco. Puoi dirmi di più su quello che hai in mente?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "Sembra che tu stia attraversando un periodo difficile. Non sei solo in questo.",
            },
        ],
        offline: "Attualmente sei offline. I tuoi messaggi verranno salvati e elaborati quando ti riconnetterai.",
        disclaimer: "Supporto AI per aiuto immediato. Non sostituisce le cure professionali.",
        crisis: "Se hai pensieri di autolesionismo, contatta immediatamente i servizi di emergenza o chiama una linea di crisi.",
    },
};

const PT: Lexicon = Lexicon {
    code: "pt",
    crisis_terms: &[
        (
            CrisisCategory::Suicide,
            &["suicídio", "matar-me", "morrer", "acabar com tudo"],
        ),
        (CrisisCategory::Despair, &["desesperado"]),
    ],
    templates: ResponseTemplates {
        welcome: "Olá! Sou seu assistente de IA MindBuddy. Estou aqui para fornecer suporte imediato e ajudar a avaliar como você se sente. Como você está hoje?",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "Obrigado por compartilhar isso. Em uma escala de 1-9, como você classificaria seu humor atual?",
                keywords: &["bem", "okay", "normal", "calmo"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "Entendo que isso é desafiador. Você tem experimentado esses sentimentos por mais de duas semanas?",
                keywords: &["estressado", "ansioso", "preocupado", "cansado", "sobrecarregado"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "Estou preocupado com o que você compartilhou. É importante que você fale com alguém imediatamente. Gostaria que eu o conectasse com suporte imediato?",
                keywords: &["triste", "deprimido", "sem esperança", "sozinho", "dor"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "É ótimo ouvir isso! O que tem ajudado você a se sentir assim?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "Entendo. Pode me contar mais sobre o que está em sua mente?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "Parece que você está passando por um momento difícil. Você não está sozinho nisso.",
            },
        ],
        offline: "Você está atualmente offline. Suas mensagens serão salvas e processadas quando você se reconectar.",
        disclaimer: "Suporte de IA para ajuda imediata. Não substitui cuidados profissionais.",
        crisis: "Se você tem pensamentos de autolesão, entre em contato com serviços de emergência imediatamente ou ligue para uma linha de crise.",
    },
};

const ZH: Lexicon = Lexicon {
    code: "zh",
    crisis_terms: &[
        (CrisisCategory::Suicide, &["自杀", "自殺", "死", "结束一切"]),
        (CrisisCategory::Despair, &["绝望"]),
    ],
    templates: ResponseTemplates {
        welcome: "你好！我是你的MindBuddy AI助手。我在这里提供即时支持，帮助评估你的感受。你今天怎么样？",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "谢谢你分享这些。在1-9的评分中，你会如何评价你当前的心情？",
                keywords: &["好", "还行", "正常", "平静"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "我理解这很有挑战性。你是否已经体验这些感受超过两周了？",
                keywords: &["压力", "焦虑", "担心", "疲倦"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "你分享的内容让我担心。立即与某人交谈很重要。你希望我为你联系即时支持吗？",
                keywords: &["悲伤", "沮丧", "绝望", "孤独", "痛苦"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "听到这个真是太好了！是什么帮助你有这样的感觉？",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "我理解。你能告诉我更多关于你心中所想的吗？",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "听起来你正在经历困难时期。在这件事上你并不孤单。",
            },
        ],
        offline: "你目前处于离线状态。你的消息将被保存，并在重新连接时处理。",
        disclaimer: "AI支持提供即时帮助。不能替代专业护理。",
        crisis: "如果你有自伤念头，请立即联系紧急服务或拨打危机热线。",
    },
};

const JA: Lexicon = Lexicon {
    code: "ja",
    crisis_terms: &[
        (CrisisCategory::Suicide, &["自殺", "死にたい"]),
        (CrisisCategory::Despair, &["絶望", "おわり"]),
    ],
    templates: ResponseTemplates {
        welcome: "こんにちは！私はあなたのMindBuddy AIアシスタントです。即座のサポートを提供し、あなたの気持ちを評価するお手伝いをします。今日はいかがですか？",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "シェアしてくれてありがとう。1-9のスケールで、現在の気分をどう評価しますか？",
                keywords: &["元気", "大丈夫", "普通", "落ち着いている"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "それが困難であることを理解しています。これらの感情を2週間以上経験していますか？",
                keywords: &["ストレス", "不安", "心配", "疲れた"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "あなたがシェアしたことが心配です。すぐに誰かと話すことが重要です。即座のサポートに接続しましょうか？",
                keywords: &["悲しい", "うつ", "絶望的", "孤独", "痛み"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "それを聞いて素晴らしいです！何があなたをそのように感じさせているのですか？",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "理解します。あなたの心にあることについてもっと教えてもらえますか？",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "困難な時期を過ごしているようですね。あなたは一人ではありません。",
            },
        ],
        offline: "現在オフラインです。メッセージは保存され、再接続時に処理されます。",
        disclaimer: "即座の支援のためのAIサポート。専門的なケアの代替ではありません。",
        crisis: "自傷の考えがある場合は、すぐに緊急サービスに連絡するか、危機ホットラインに電話してください。",
    },
};

const KO: Lexicon = Lexicon {
    code: "ko",
    crisis_terms: &[
        (
            CrisisCategory::Suicide,
            &["자살", "죽고싶다", "끝내고싶다"],
        ),
        (CrisisCategory::Despair, &["절망"]),
    ],
    templates: ResponseTemplates {
        welcome: "안녕하세요! 저는 당신의 MindBuddy AI 어시스턴트입니다. 즉각적인 지원을 제공하고 당신의 기분을 평가하는 데 도움을 드리고 있습니다. 오늘 어떠세요?",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "공유해 주셔서 감사합니다. 1-9 척도에서 현재 기분을 어떻게 평가하시겠습니까?",
                keywords: &["좋아", "괜찮아", "보통", "평온한"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "이것이 도전적이라는 것을 이해합니다. 이러한 감정을 2주 이상 경험하고 계신가요?",
                keywords: &["스트레스", "불안한", "걱정", "피곤한"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "당신이 공유한 내용이 걱정됩니다. 즉시 누군가와 이야기하는 것이 중요합니다. 즉각적인 지원에 연결하시겠습니까?",
                keywords: &["슬픈", "우울한", "절망적인", "외로운", "고통"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "그것을 들으니 정말 좋습니다! 무엇이 그렇게 느끼게 도와주고 있나요?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "이해합니다. 마음에 있는 것에 대해 더 말씀해 주시겠습니까?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "어려운 시기를 겪고 계신 것 같습니다. 이 일에서 혼자가 아닙니다.",
            },
        ],
        offline: "현재 오프라인 상태입니다. 메시지가 저장되고 다시 연결될 때 처리됩니다.",
        disclaimer: "즉각적인 도움을 위한 AI 지원. 전문적인 치료를 대체하지 않습니다.",
        crisis: "자해 생각이 있으시면 즉시 응급 서비스에 연락하거나 위기 상담 전화에 전화하세요.",
    },
};

const AR: Lexicon = Lexicon {
    code: "ar",
    crisis_terms: &[
        (CrisisCategory::Suicide, &["انتحار", "إنهاء كل شيء"]),
        (CrisisCategory::Despair, &["اليأس", "الموت"]),
    ],
    templates: ResponseTemplates {
        welcome: "مرحبا! أنا مساعد الذكي MindBuddy. أنا هنا لتقديم الدعم الفوري ومساعدتك في تقييم مشاعرك. كيف حالك اليوم؟",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "شكرا لك على مشاركة ذلك. على مقياس من 1-9، كيف تقيم مزاجك الحالي؟",
                keywords: &["جيد", "بخير", "عادي", "هادئ"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "أفهم أن هذا صعب. هل تواجه هذه المشاعر لأكثر من أسبوعين؟",
                keywords: &["مضغوط", "قلق", "متعب", "مرهق"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "ما شاركته يقلقني. من المهم أن تتحدث مع شخص ما فورا. هل تريد أن أصلك بالدعم الفوري؟",
                keywords: &["حزين", "مكتئب", "يائس", "وحيد", "ألم"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "من الرائع سماع ذلك! ما الذي يساعدك على الشعور بهذه الطريقة؟",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "أفهم. هل يمكنك إخباري المزيد عما يدور في ذهنك؟",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "يبدو أنك تمر بوقت صعب. أنت لست وحدك في هذا.",
            },
        ],
        offline: "أنت حاليا غير متصل. سيتم حفظ رسائلك ومعالجتها عند إعادة الاتصال.",
        disclaimer: "دعم الذكاء الاصطناعي للمساعدة الفورية. ليس بديلا عن الرعاية المهنية.",
        crisis: "إذا كان لديك أفكار إيذاء النفس، يرجى الاتصال بخدمات الطوارئ فورا أو الاتصال بخط أزمة.",
    },
};

const HI: Lexicon = Lexicon {
    code: "hi",
    crisis_terms: &[
        (
            CrisisCategory::Suicide,
            &["आत्महत्या", "मरना चाहता हूं"],
        ),
        (CrisisCategory::Despair, &["निराशा", "सब कुछ खत्म"]),
    ],
    templates: ResponseTemplates {
        welcome: "नमस्ते! मैं आपका MindBuddy AI सहायक हूं। मैं तत्काल सहायता प्रदान करने और आपकी भावनाओं का मूल्यांकन करने में मदद करने के लिए यहां हूं। आज आप कैसे हैं?",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "इसे साझा करने के लिए धन्यवाद। 1-9 के पैमाने पर, आप अपने वर्तमान मूड को कैसे रेट करेंगे?",
                keywords: &["अच्छा", "ठीक", "सामान्य", "शांत"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "मैं समझता हूं कि यह चुनौतीपूर्ण है। क्या आप इन भावनाओं को दो सप्ताह से अधिक समय से अनुभव कर रहे हैं?",
                keywords: &["तनावग्रस्त", "चिंतित", "थका हुआ", "अभिभूत"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "आपने जो साझा किया है उससे मैं चिंतित हूं। यह महत्वपूर्ण है कि आप तुरंत किसी से बात करें। क्या आप चाहेंगे कि मैं आपको तत्काल सहायता से जोड़ूं?",
                keywords: &["उदास", "अवसादग्रस्त", "निराश", "अकेला", "दर्द"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "यह सुनना बहुत अच्छा है! आपको इस तरह महसूस करने में क्या मदद मिल रही है?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "मैं समझता हूं। क्या आप मुझे बता सकते हैं कि आपके मन में क्या चल रहा है?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "ऐसा लगता है कि आप कठिन समय से गुजर रहे हैं। इसमें आप अकेले नहीं हैं।",
            },
        ],
        offline: "आप वर्तमान में ऑफलाइन हैं। आपके संदेश सहेजे जाएंगे और पुनः कनेक्ट होने पर संसाधित होंगे।",
        disclaimer: "तत्काल सहायता के लिए AI समर्थन। पेशेवर देखभाल का विकल्प नहीं।",
        crisis: "यदि आपको आत्म-हानि के विचार आ रहे हैं, तो कृपया तुरंत आपातकालीन सेवाओं से संपर्क करें या संकट हेल्पलाइन पर कॉल करें।",
    },
};

const RU: Lexicon = Lexicon {
    code: "ru",
    crisis_terms: &[
        (
            CrisisCategory::Suicide,
            &["самоубийство", "умереть", "покончить со всем"],
        ),
        (CrisisCategory::Despair, &["безнадежность"]),
    ],
    templates: ResponseTemplates {
        welcome: "Привет! Я ваш ИИ-помощник MindBuddy. Я здесь, чтобы оказать немедленную поддержку и помочь оценить ваши чувства. Как дела сегодня?",
        tiers: &[
            TierTemplate {
                severity: Severity::Low,
                text: "Спасибо, что поделились этим. По шкале от 1 до 9, как бы вы оценили свое текущее настроение?",
                keywords: &["хорошо", "нормально", "обычно", "спокойно"],
            },
            TierTemplate {
                severity: Severity::Medium,
                text: "Я понимаю, что это сложно. Испытываете ли вы эти чувства более двух недель?",
                keywords: &["стресс", "тревожный", "беспокойный", "усталый"],
            },
            TierTemplate {
                severity: Severity::High,
                text: "То, чем вы поделились, меня беспокоит. Важно, чтобы вы немедленно поговорили с кем-то. Хотели бы вы, чтобы я соединил вас с немедленной поддержкой?",
                keywords: &["грустный", "подавленный", "безнадежный", "одинокий", "боль"],
            },
        ],
        follow_ups: &[
            FollowUpTemplate {
                trigger: Sentiment::Positive,
                text: "Здорово это слышать! Что помогает вам так себя чувствовать?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Neutral,
                text: "Понимаю. Можете рассказать больше о том, что у вас на уме?",
            },
            FollowUpTemplate {
                trigger: Sentiment::Negative,
                text: "Похоже, вы переживаете трудное время. Вы не одиноки в этом.",
            },
        ],
        offline: "Вы сейчас офлайн. Ваши сообщения будут сохранены и обработаны при повторном подключении.",
        disclaimer: "ИИ-поддержка для немедленной помощи. Не заменяет профессиональный уход.",
        crisis: "Если у вас есть мысли о самоповреждении, немедленно обратитесь в службу экстренной помощи или позвоните на горячую линию кризиса.",
    },
};

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_falls_back_to_default() {
        let store = LexiconStore::builtin();
        let fallback = store.get("xx");
        assert_eq!(fallback.code, "en");
        assert_eq!(fallback.templates.welcome, store.get("en").templates.welcome);
    }

    #[test]
    fn test_known_code_resolves_itself() {
        let store = LexiconStore::builtin();
        assert_eq!(store.get("es").code, "es");
        assert_eq!(store.get("ja").code, "ja");
    }

    #[test]
    fn test_every_bundled_language_is_complete() {
        let store = LexiconStore::builtin();
        for code in store.codes() {
            let lexicon = store.get(code);
            assert!(!lexicon.templates.welcome.is_empty(), "{} welcome missing", code);
            assert!(!lexicon.templates.offline.is_empty(), "{} offline missing", code);
            assert!(!lexicon.templates.disclaimer.is_empty(), "{} disclaimer missing", code);
            assert!(!lexicon.templates.crisis.is_empty(), "{} crisis missing", code);
            assert_eq!(lexicon.templates.tiers.len(), 3, "{} should carry 3 tiers", code);
            assert_eq!(
                lexicon.templates.follow_ups.len(),
                3,
                "{} should carry 3 follow-ups",
                code
            );
            for severity in [Severity::Low, Severity::Medium, Severity::High] {
                assert!(lexicon.tier_text(severity).is_some(), "{} missing tier", code);
            }
        }
    }

    #[test]
    fn test_default_language_has_no_localized_terms() {
        let store = LexiconStore::builtin();
        assert!(store.get("en").crisis_terms.is_empty());
    }

    #[test]
    fn test_non_default_languages_carry_suicide_terms() {
        let store = LexiconStore::builtin();
        for code in store.codes().filter(|c| *c != DEFAULT_LANGUAGE) {
            let has_suicide = store
                .get(code)
                .crisis_terms
                .iter()
                .any(|(category, terms)| {
                    *category == CrisisCategory::Suicide && !terms.is_empty()
                });
            assert!(has_suicide, "{} should carry localized suicide terms", code);
        }
    }

    #[test]
    fn test_supports() {
        let store = LexiconStore::builtin();
        assert!(store.supports("en"));
        assert!(store.supports("zh"));
        assert!(!store.supports("tlh"));
    }

    #[test]
    fn test_global_store_is_builtin() {
        assert_eq!(LexiconStore::global().len(), LexiconStore::builtin().len());
        assert!(!LexiconStore::global().is_empty());
    }
}
