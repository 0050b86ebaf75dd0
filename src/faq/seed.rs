use crate::faq::entry::FaqEntry;
use crate::types::identifiers::ChatbotId;

pub const DEFAULT_CHATBOT_ID: &str = "default-chatbot";

/// The five starter FAQs a fresh deployment is seeded with.
pub fn default_faqs() -> Vec<FaqEntry> {
    let bot = ChatbotId::new(DEFAULT_CHATBOT_ID);
    let rows: [(&str, &str, &str, &[&str]); 5] = [
        (
            "faq-營業時間",
            "營業時間是什麼時候？",
            "我們的營業時間是週一到週五 9:00-18:00，週六 10:00-16:00，週日休息。",
            &["營業時間", "時間", "開放時間", "幾點開門"],
        ),
        (
            "faq-退貨流程",
            "我想退貨，請問流程是什麼？",
            "退貨流程如下：1. 聯繫客服申請退貨 2. 填寫退貨單 3. 包裝商品寄回 4. 等待退款處理。",
            &["退貨", "退款", "退貨流程", "如何退貨"],
        ),
        (
            "faq-聯絡方式",
            "如何聯絡客服？",
            "您可以通過以下方式聯絡我們：電話：02-1234-5678，Email：service@example.com，或使用線上客服系統。",
            &["聯絡", "客服", "電話", "email", "聯繫方式"],
        ),
        (
            "faq-配送時間",
            "商品多久會送到？",
            "一般商品 3-5 個工作天內送達，偏遠地區可能需要 5-7 個工作天。急件可選擇當日配送服務。",
            &["配送", "送達", "多久", "運送時間", "物流"],
        ),
        (
            "faq-付款方式",
            "支援哪些付款方式？",
            "我們支援信用卡、ATM 轉帳、超商代碼繳費、LINE Pay、街口支付等多種付款方式。",
            &["付款", "支付", "信用卡", "轉帳", "LINE Pay"],
        ),
    ];

    rows.into_iter()
        .zip(1u32..)
        .map(|((id, question, answer, keywords), priority)| {
            FaqEntry::new(id, question, answer)
                .with_keywords(keywords.iter().copied())
                .with_priority(priority)
                .with_chatbot(bot.clone())
        })
        .collect()
}
